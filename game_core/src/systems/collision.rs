use crate::{Ball, Config, Events, Heading, Paddle, Rect, Side};
use hecs::World;

/// Where the ball touches a paddle on the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchKind {
    #[default]
    NoTouch,
    LeftFace,
    LeftFaceLower,
    LeftBelow,
    LeftFaceUpper,
    LeftAbove,
    RightFace,
    RightFaceLower,
    RightBelow,
    RightFaceUpper,
    RightAbove,
}

/// Contact zone on a single paddle, independent of which side it guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Face,
    FaceLower,
    Below,
    FaceUpper,
    Above,
}

impl TouchKind {
    fn from_zone(side: Side, zone: Zone) -> Self {
        match (side, zone) {
            (Side::Left, Zone::Face) => TouchKind::LeftFace,
            (Side::Left, Zone::FaceLower) => TouchKind::LeftFaceLower,
            (Side::Left, Zone::Below) => TouchKind::LeftBelow,
            (Side::Left, Zone::FaceUpper) => TouchKind::LeftFaceUpper,
            (Side::Left, Zone::Above) => TouchKind::LeftAbove,
            (Side::Right, Zone::Face) => TouchKind::RightFace,
            (Side::Right, Zone::FaceLower) => TouchKind::RightFaceLower,
            (Side::Right, Zone::Below) => TouchKind::RightBelow,
            (Side::Right, Zone::FaceUpper) => TouchKind::RightFaceUpper,
            (Side::Right, Zone::Above) => TouchKind::RightAbove,
        }
    }

    /// Numeric code printed by the touch debug key (0 = no touch)
    pub fn code(self) -> u8 {
        match self {
            TouchKind::NoTouch => 0,
            TouchKind::LeftFace => 1,
            TouchKind::LeftFaceLower => 2,
            TouchKind::LeftBelow => 3,
            TouchKind::LeftFaceUpper => 4,
            TouchKind::LeftAbove => 5,
            TouchKind::RightFace => 6,
            TouchKind::RightFaceLower => 7,
            TouchKind::RightBelow => 8,
            TouchKind::RightFaceUpper => 9,
            TouchKind::RightAbove => 10,
        }
    }

    pub fn is_touch(self) -> bool {
        self != TouchKind::NoTouch
    }

    pub fn side(self) -> Option<Side> {
        match self {
            TouchKind::NoTouch => None,
            TouchKind::LeftFace
            | TouchKind::LeftFaceLower
            | TouchKind::LeftBelow
            | TouchKind::LeftFaceUpper
            | TouchKind::LeftAbove => Some(Side::Left),
            _ => Some(Side::Right),
        }
    }
}

/// Ball edge is at or past the paddle's inner face without being wholly behind it
fn face_contact(ball: &Rect, paddle: &Rect, side: Side) -> bool {
    match side {
        Side::Left => ball.left() <= paddle.right() && ball.right() > paddle.right(),
        Side::Right => ball.right() >= paddle.left() && ball.left() < paddle.left(),
    }
}

/// Classify the ball's contact with one paddle.
///
/// The zone is picked from the ball's vertical center, so every position maps
/// to exactly one outcome:
/// - center above the paddle top, ball within one ball height of it: `Above`
/// - center below the paddle bottom, ball within one ball height of it: `Below`
/// - center alongside the paddle and the ball on the inner face: `Face`,
///   `FaceUpper` or `FaceLower` depending on the center's distance from the
///   paddle middle compared with half of `face_band`
///
/// The corner zones need horizontal overlap with the paddle.
pub fn classify_touch(ball: &Rect, paddle: &Rect, side: Side, face_band: f32) -> TouchKind {
    let cy = ball.center().y;
    let reach = ball.size.y;

    let zone = if cy < paddle.top() {
        (ball.bottom() >= paddle.top() - reach && ball.overlaps_x(paddle)).then_some(Zone::Above)
    } else if cy > paddle.bottom() {
        (ball.top() <= paddle.bottom() + reach && ball.overlaps_x(paddle)).then_some(Zone::Below)
    } else if face_contact(ball, paddle, side) {
        let mid = paddle.center().y;
        let half_band = face_band / 2.0;
        Some(if cy < mid - half_band {
            Zone::FaceUpper
        } else if cy > mid + half_band {
            Zone::FaceLower
        } else {
            Zone::Face
        })
    } else {
        None
    };

    zone.map_or(TouchKind::NoTouch, |zone| TouchKind::from_zone(side, zone))
}

/// New direction flags after a contact. Face hits always send the ball away
/// from the struck paddle, so a ball still overlapping next tick is not
/// turned back into it.
pub fn reflect(kind: TouchKind, heading: Heading) -> Heading {
    let Heading {
        moving_right,
        moving_up,
    } = heading;
    match kind {
        TouchKind::NoTouch => heading,
        TouchKind::LeftFace => Heading::new(true, moving_up),
        TouchKind::LeftFaceLower => Heading::new(true, false),
        TouchKind::LeftBelow => Heading::new(moving_right, false),
        TouchKind::LeftFaceUpper => Heading::new(true, true),
        TouchKind::LeftAbove => Heading::new(moving_right, true),
        TouchKind::RightFace => Heading::new(false, moving_up),
        TouchKind::RightFaceLower => Heading::new(false, false),
        TouchKind::RightBelow => Heading::new(moving_right, false),
        TouchKind::RightFaceUpper => Heading::new(false, true),
        TouchKind::RightAbove => Heading::new(moving_right, true),
    }
}

/// Point the vertical flag back on screen when the ball crosses the top or
/// bottom edge. Returns the new heading and whether a wall was hit.
pub fn bounce_walls(ball: &Rect, heading: Heading, screen_height: f32) -> (Heading, bool) {
    if ball.top() < 0.0 {
        (Heading::new(heading.moving_right, false), true)
    } else if ball.bottom() > screen_height {
        (Heading::new(heading.moving_right, true), true)
    } else {
        (heading, false)
    }
}

/// Test the ball against both paddles and the top/bottom walls, updating its
/// heading. Returns the paddle contact found this tick.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) -> TouchKind {
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    // Left before right, independent of spawn order
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    let mut touch = TouchKind::NoTouch;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect(config.ball_size);

        for &(side, y) in &paddles {
            let paddle_rect = config.paddle_rect(side, y);
            let kind = classify_touch(&ball_rect, &paddle_rect, side, config.face_band);
            if kind.is_touch() {
                ball.heading = reflect(kind, ball.heading);
                events.ball_hit_paddle = true;
                touch = kind;
                break;
            }
        }

        let (heading, hit_wall) = bounce_walls(&ball_rect, ball.heading, config.screen_height);
        ball.heading = heading;
        events.ball_hit_wall |= hit_wall;
    }

    touch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ai_paddle, create_ball, create_human_paddle};
    use glam::Vec2;

    const LEFT_Y: f32 = 200.0;
    const RIGHT_Y: f32 = 200.0;

    fn setup_world() -> (hecs::World, Config, Events) {
        let mut world = hecs::World::new();
        let config = Config::new();
        create_human_paddle(&mut world, Side::Left, LEFT_Y);
        create_ai_paddle(&mut world, Side::Right, RIGHT_Y, false);
        (world, config, Events::new())
    }

    fn heading_after(world: &mut World, pos: Vec2, heading: Heading) -> (Heading, TouchKind) {
        let config = Config::new();
        let mut events = Events::new();
        let ball = create_ball(world, pos, heading);
        let touch = check_collisions(world, &config, &mut events);
        let heading = world.get::<&Ball>(ball).unwrap().heading;
        (heading, touch)
    }

    #[test]
    fn test_left_lower_face_sends_ball_right_and_down() {
        let (mut world, config, _) = setup_world();
        let left_x = config.paddle_x(Side::Left);
        let pos = Vec2::new(left_x + 99.0, LEFT_Y + 250.0);

        let (heading, touch) = heading_after(&mut world, pos, Heading::new(false, true));

        assert_eq!(touch, TouchKind::LeftFaceLower);
        assert_eq!(heading, Heading::new(true, false));
    }

    #[test]
    fn test_left_below_only_changes_vertical() {
        let (mut world, config, _) = setup_world();
        let left_x = config.paddle_x(Side::Left);
        // Ball top resting on the paddle's bottom edge, inside its span
        let pos = Vec2::new(left_x + 30.0, LEFT_Y + config.paddle_height);

        let (heading, touch) = heading_after(&mut world, pos, Heading::new(false, true));

        assert_eq!(touch, TouchKind::LeftBelow);
        assert_eq!(
            heading,
            Heading::new(false, false),
            "Horizontal flag should be untouched"
        );
    }

    #[test]
    fn test_ball_just_under_paddle_is_below() {
        let (mut world, config, _) = setup_world();
        let pos = Vec2::new(30.0, LEFT_Y + config.paddle_height + 1.0);

        let (heading, touch) = heading_after(&mut world, pos, Heading::new(false, true));

        assert_eq!(touch, TouchKind::LeftBelow);
        assert_eq!(heading, Heading::new(false, false));
    }

    #[test]
    fn test_below_zone_ends_one_ball_height_under_paddle() {
        let config = Config::new();
        let left = config.paddle_rect(Side::Left, LEFT_Y);
        let at = |y: f32| {
            let ball = Rect::square(Vec2::new(30.0, y), config.ball_size);
            classify_touch(&ball, &left, Side::Left, config.face_band)
        };

        assert_eq!(at(left.bottom() + config.ball_size), TouchKind::LeftBelow);
        assert_eq!(at(left.bottom() + config.ball_size + 1.0), TouchKind::NoTouch);
    }

    #[test]
    fn test_above_zone_ends_one_ball_height_over_paddle() {
        let config = Config::new();
        let left = config.paddle_rect(Side::Left, LEFT_Y);
        let at = |y: f32| {
            let ball = Rect::square(Vec2::new(30.0, y), config.ball_size);
            classify_touch(&ball, &left, Side::Left, config.face_band)
        };

        // Ball bottom exactly one ball height above the paddle top
        assert_eq!(at(left.top() - 2.0 * config.ball_size), TouchKind::LeftAbove);
        assert_eq!(
            at(left.top() - 2.0 * config.ball_size - 1.0),
            TouchKind::NoTouch
        );
    }

    #[test]
    fn test_ball_beside_paddle_span_is_no_touch() {
        let config = Config::new();
        let left = config.paddle_rect(Side::Left, LEFT_Y);
        // Under the paddle's height but past its right edge
        let ball = Rect::square(Vec2::new(left.right() + 1.0, left.bottom() + 5.0), 50.0);
        assert_eq!(
            classify_touch(&ball, &left, Side::Left, config.face_band),
            TouchKind::NoTouch
        );
    }

    #[test]
    fn test_left_flush_face_only_reverses_horizontal() {
        let (mut world, config, _) = setup_world();
        let mid = LEFT_Y + config.paddle_height / 2.0 - config.ball_size / 2.0;
        let pos = Vec2::new(90.0, mid);

        let (heading, touch) = heading_after(&mut world, pos, Heading::new(false, true));
        assert_eq!(touch, TouchKind::LeftFace);
        assert_eq!(heading, Heading::new(true, true));
    }

    #[test]
    fn test_left_upper_face_sends_ball_up() {
        let (mut world, _, _) = setup_world();
        let pos = Vec2::new(80.0, LEFT_Y + 10.0);

        let (heading, touch) = heading_after(&mut world, pos, Heading::new(false, false));
        assert_eq!(touch, TouchKind::LeftFaceUpper);
        assert_eq!(heading, Heading::new(true, true));
    }

    #[test]
    fn test_left_above_only_changes_vertical() {
        let (mut world, _, _) = setup_world();
        // Ball bottom 10 units into the paddle top, center still above it
        let pos = Vec2::new(40.0, LEFT_Y - 40.0);

        let (heading, touch) = heading_after(&mut world, pos, Heading::new(false, false));
        assert_eq!(touch, TouchKind::LeftAbove);
        assert_eq!(heading, Heading::new(false, true));
    }

    #[test]
    fn test_right_face_mirrors_left() {
        let (mut world, config, _) = setup_world();
        let right_x = config.paddle_x(Side::Right);
        let mid = RIGHT_Y + config.paddle_height / 2.0 - config.ball_size / 2.0;

        let (heading, touch) = heading_after(
            &mut world,
            Vec2::new(right_x - 40.0, mid),
            Heading::new(true, false),
        );
        assert_eq!(touch, TouchKind::RightFace);
        assert_eq!(heading, Heading::new(false, false));
    }

    #[test]
    fn test_right_lower_and_upper_faces() {
        let config = Config::new();
        let right = config.paddle_rect(Side::Right, RIGHT_Y);
        let x = right.left() - 20.0;

        let lower = Rect::square(Vec2::new(x, RIGHT_Y + 240.0), config.ball_size);
        let upper = Rect::square(Vec2::new(x, RIGHT_Y), config.ball_size);
        assert_eq!(
            classify_touch(&lower, &right, Side::Right, config.face_band),
            TouchKind::RightFaceLower
        );
        assert_eq!(
            classify_touch(&upper, &right, Side::Right, config.face_band),
            TouchKind::RightFaceUpper
        );
    }

    #[test]
    fn test_right_above_and_below() {
        let config = Config::new();
        let right = config.paddle_rect(Side::Right, RIGHT_Y);
        let x = right.left() + 20.0;

        let above = Rect::square(Vec2::new(x, RIGHT_Y - config.ball_size), config.ball_size);
        let below = Rect::square(Vec2::new(x, right.bottom() - 5.0), config.ball_size);
        assert_eq!(
            classify_touch(&above, &right, Side::Right, config.face_band),
            TouchKind::RightAbove
        );
        assert_eq!(
            classify_touch(&below, &right, Side::Right, config.face_band),
            TouchKind::RightBelow
        );
    }

    #[test]
    fn test_ball_behind_face_is_no_touch() {
        let config = Config::new();
        let left = config.paddle_rect(Side::Left, LEFT_Y);
        // Tunnelled wholly inside the paddle
        let inside = Rect::square(Vec2::new(20.0, LEFT_Y + 100.0), config.ball_size);
        assert_eq!(
            classify_touch(&inside, &left, Side::Left, config.face_band),
            TouchKind::NoTouch
        );
    }

    #[test]
    fn test_repeated_contact_does_not_turn_ball_back() {
        let (mut world, _, _) = setup_world();
        let pos = Vec2::new(95.0, LEFT_Y + 250.0);

        let (first, _) = heading_after(&mut world, pos, Heading::new(false, true));
        let mut events = Events::new();
        check_collisions(&mut world, &Config::new(), &mut events);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.heading, first, "Second contact should keep heading");
        }
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(600.0, -1.0), Heading::new(true, true));

        check_collisions(&mut world, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(!ball.heading.moving_up, "Ball should head down after top wall");
            assert!(ball.heading.moving_right, "Horizontal flag unchanged");
        }
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let y = config.screen_height - config.ball_size + 1.0;
        create_ball(&mut world, Vec2::new(600.0, y), Heading::new(false, false));

        check_collisions(&mut world, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(ball.heading.moving_up, "Ball should head up after bottom wall");
            assert!(!ball.heading.moving_right);
        }
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_resting_on_wall_is_not_a_hit() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(600.0, 0.0), Heading::new(true, true));

        check_collisions(&mut world, &config, &mut events);
        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();

        let touch = check_collisions(&mut world, &config, &mut events);

        assert_eq!(touch, TouchKind::NoTouch);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_touch_codes_are_distinct() {
        let all = [
            TouchKind::NoTouch,
            TouchKind::LeftFace,
            TouchKind::LeftFaceLower,
            TouchKind::LeftBelow,
            TouchKind::LeftFaceUpper,
            TouchKind::LeftAbove,
            TouchKind::RightFace,
            TouchKind::RightFaceLower,
            TouchKind::RightBelow,
            TouchKind::RightFaceUpper,
            TouchKind::RightAbove,
        ];
        for (i, kind) in all.iter().enumerate() {
            assert_eq!(kind.code() as usize, i);
        }
        assert_eq!(TouchKind::LeftAbove.side(), Some(Side::Left));
        assert_eq!(TouchKind::RightBelow.side(), Some(Side::Right));
        assert_eq!(TouchKind::NoTouch.side(), None);
    }

    #[test]
    fn test_reflect_no_touch_is_identity() {
        let heading = Heading::new(true, false);
        assert_eq!(reflect(TouchKind::NoTouch, heading), heading);
    }
}
