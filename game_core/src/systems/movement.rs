use crate::{AiDriver, Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply pending key-press movement to human paddles, then clamp
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        paddle.y = config.clamp_paddle_y(paddle.y + intent.delta);
        intent.delta = 0.0;
    }
}

/// Drive computer paddles up and down between the screen bounds
pub fn drive_ai_paddles(world: &mut World, time: &Time, config: &Config) {
    let max_y = config.paddle_max_y();
    for (_entity, (paddle, driver)) in world.query_mut::<(&mut Paddle, &mut AiDriver)>() {
        let step = config.ai_paddle_speed * time.dt;
        paddle.y += if driver.moving_up { -step } else { step };

        if paddle.y <= 0.0 {
            paddle.y = 0.0;
            driver.moving_up = false;
        } else if paddle.y >= max_y {
            paddle.y = max_y;
            driver.moving_up = true;
        }
    }
}

/// Move ball along its heading
pub fn move_ball(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.heading.dir() * config.ball_speed * time.dt;
    }
}
