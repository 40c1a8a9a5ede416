use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball left the screen through a side edge.
/// Returns the side that won the point.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            // Past the human paddle: computer scores
            scorer = Some(Side::Right);
        } else if ball.pos.x > config.screen_width - config.ball_size {
            scorer = Some(Side::Left);
        }
    }

    if let Some(side) = scorer {
        score.award(side);
        match side {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::info!(
            "{:?} player scores ({} - {})",
            side,
            score.left,
            score.right
        );
    }
    scorer
}

/// Re-center the ball and invert both of its direction flags
pub fn reset_ball(world: &mut World, config: &Config) {
    let center = config.ball_center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Heading};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score, Events) {
        (hecs::World::new(), Config::new(), Score::new(), Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 300.0), Heading::new(false, true));

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup_world();
        let x = config.screen_width - config.ball_size + 0.1;
        create_ball(&mut world, Vec2::new(x, 300.0), Heading::new(true, true));

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 300.0), Heading::new(false, true));
        create_ball(
            &mut world,
            Vec2::new(config.screen_width - config.ball_size, 300.0),
            Heading::new(true, true),
        );

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new(), "No score on the edge itself");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_reset_centers_ball_and_inverts_flags() {
        let (mut world, config, _, _) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(-4.0, 12.0), Heading::new(false, true));

        reset_ball(&mut world, &config);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, config.ball_center());
        assert_eq!(ball.heading, Heading::new(true, false));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        let ball = create_ball(
            &mut world,
            Vec2::new(config.screen_width, 300.0),
            Heading::new(true, false),
        );
        check_scoring(&mut world, &config, &mut score, &mut events);
        events.clear();

        world.get::<&mut Ball>(ball).unwrap().pos.x = config.screen_width + 5.0;
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
