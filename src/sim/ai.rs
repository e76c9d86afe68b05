//! AI move policies and intercept prediction
//!
//! The predictive policy stores a target intercept height that is
//! recomputed whenever the opposing paddle returns the ball. The per-paddle
//! aim error is applied when choosing a step, never baked into the target.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bounds::Bounds;
use super::paddle::Side;
use crate::consts::*;

/// How an AI paddle picks its vertical step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiPolicy {
    /// Always follow the ball's center
    TrackBall,
    /// Chase from afar, steer to the predicted intercept up close,
    /// drift to the middle while the ball moves away
    #[default]
    Predict,
}

/// Outcome of an intercept prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intercept {
    /// Height the ball will cross the paddle's center line at
    Target(f32),
    /// Ball is moving away from the paddle; nothing to predict
    Receding,
    /// Extrapolated height was not a finite number
    Diverged,
}

/// Fold a height into `[0, FOLD_HEIGHT]` by mirroring off both walls.
///
/// Any number of reflections folds in constant time. Returns `None` only
/// for non-finite input.
pub fn fold_into_field(y: f32) -> Option<f32> {
    if !y.is_finite() {
        return None;
    }
    let period = 2.0 * FOLD_HEIGHT;
    let y = y.abs().rem_euclid(period);
    Some(if y > FOLD_HEIGHT { period - y } else { y })
}

/// Predict where the ball meets the vertical line through `paddle`'s center.
///
/// # Panics
/// If the ball has no horizontal velocity. A paddle hit always leaves the
/// ball moving sideways, so this is a broken invariant, not a game state.
pub fn predict_intercept(paddle: Bounds, ball: &Ball) -> Intercept {
    let vel = ball.velocity();
    assert!(
        vel.x != 0.0,
        "intercept prediction with zero horizontal ball velocity"
    );

    let bb = ball.bounds();
    let dx = (paddle.center_x() - bb.center_x()) as f32;
    let dt = (dx / vel.x).trunc();
    if dt < 0.0 {
        return Intercept::Receding;
    }

    let yf = bb.center_y() as f32 + vel.y * dt;
    match fold_into_field(yf) {
        Some(y) => Intercept::Target(y),
        None => Intercept::Diverged,
    }
}

/// Vertical step for this tick: `-PADDLE_SPEED`, `0` or `PADDLE_SPEED`
pub fn decide_step(
    policy: AiPolicy,
    side: Side,
    paddle: Bounds,
    ball: &Ball,
    target: f32,
    aim_error: i32,
) -> f32 {
    let bb = ball.bounds();
    let cy = paddle.center_y();
    match policy {
        AiPolicy::TrackBall => step_toward((bb.center_y() - cy) as f32),
        AiPolicy::Predict => {
            if !side.is_approaching(ball.velocity().x) {
                return step_toward((FIELD_MID_Y + aim_error - cy) as f32);
            }
            let dx = bb.center_x() - paddle.center_x();
            if dx.abs() < AI_CHASE_DISTANCE {
                step_toward(target - (cy + aim_error) as f32)
            } else {
                step_toward((bb.center_y() - cy + aim_error) as f32)
            }
        }
    }
}

fn step_toward(delta: f32) -> f32 {
    if delta > 0.0 {
        PADDLE_SPEED
    } else if delta < 0.0 {
        -PADDLE_SPEED
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_bank;
    use crate::sim::animation::Animator;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Ball whose box is centered on `center`
    fn ball_at(center: Vec2, vel: Vec2) -> Ball {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ball = Ball::new(Animator::new(test_bank().ball, "idle").unwrap(), &mut rng);
        ball.set_position(center - Vec2::splat(2.0));
        ball.set_velocity(vel);
        ball
    }

    fn paddle_at(center_x: i32, center_y: i32) -> Bounds {
        Bounds::new(center_x - 2, center_y - 12, 5, 25)
    }

    #[test]
    fn test_fold_examples() {
        assert_eq!(fold_into_field(160.0), Some(140.0));
        assert_eq!(fold_into_field(-10.0), Some(10.0));
        assert_eq!(fold_into_field(150.0), Some(150.0));
        assert_eq!(fold_into_field(-0.0), Some(0.0));
        assert_eq!(fold_into_field(460.0), Some(140.0));
    }

    #[test]
    fn test_fold_far_flights() {
        assert_eq!(fold_into_field(1700.0), Some(100.0));
        assert_eq!(fold_into_field(1800.0), Some(0.0));
        assert_eq!(fold_into_field(-1650.0), Some(150.0));
        assert_eq!(fold_into_field(1.0e6), Some(100.0));
    }

    #[test]
    fn test_fold_rejects_non_finite() {
        assert_eq!(fold_into_field(f32::NAN), None);
        assert_eq!(fold_into_field(f32::INFINITY), None);
        assert_eq!(fold_into_field(f32::NEG_INFINITY), None);
    }

    proptest! {
        #[test]
        fn prop_fold_within_two_reflections(y in -150.0f32..=300.0) {
            let mut v = y;
            let mut reflections = 0;
            while !(0.0..=150.0).contains(&v) {
                v = if v < 0.0 { -v } else { 300.0 - v };
                reflections += 1;
            }
            prop_assert!(reflections <= 2);
            prop_assert_eq!(fold_into_field(y), Some(v));
        }

        #[test]
        fn prop_fold_is_idempotent(y in -2000.0f32..2000.0) {
            if let Some(f) = fold_into_field(y) {
                prop_assert!((0.0..=150.0).contains(&f));
                prop_assert_eq!(fold_into_field(f), Some(f));
            }
        }
    }

    #[test]
    fn test_receding_ball_keeps_no_target() {
        let ball = ball_at(Vec2::new(100.0, 75.0), Vec2::new(-1.5, 0.6));
        let right = paddle_at(190, 75);
        assert_eq!(predict_intercept(right, &ball), Intercept::Receding);
    }

    #[test]
    fn test_straight_intercept() {
        let ball = ball_at(Vec2::new(100.0, 75.0), Vec2::new(1.5, 0.5));
        let right = paddle_at(190, 75);
        // dt = 90 / 1.5 = 60, yf = 75 + 30
        assert_eq!(predict_intercept(right, &ball), Intercept::Target(105.0));
    }

    #[test]
    fn test_intercept_reflects_off_bottom() {
        let ball = ball_at(Vec2::new(100.0, 140.0), Vec2::new(1.5, 1.0));
        let right = paddle_at(190, 75);
        // yf = 140 + 60 = 200 -> 100
        assert_eq!(predict_intercept(right, &ball), Intercept::Target(100.0));
    }

    #[test]
    fn test_steep_flight_still_predicts() {
        let ball = ball_at(Vec2::new(100.0, 75.0), Vec2::new(1.5, 30.0));
        let right = paddle_at(190, 75);
        // yf = 75 + 60 * 30 = 1875, six full periods past 75
        assert_eq!(predict_intercept(right, &ball), Intercept::Target(75.0));
    }

    #[test]
    fn test_intercept_for_left_paddle() {
        let ball = ball_at(Vec2::new(100.0, 20.0), Vec2::new(-1.5, -0.5));
        let left = paddle_at(7, 75);
        // dt = trunc(-93 / -1.5) = 62, yf = 20 - 31 = -11 -> 11
        assert_eq!(predict_intercept(left, &ball), Intercept::Target(11.0));
    }

    #[test]
    #[should_panic(expected = "zero horizontal")]
    fn test_zero_velocity_is_a_bug() {
        let ball = ball_at(Vec2::new(100.0, 75.0), Vec2::ZERO);
        predict_intercept(paddle_at(190, 75), &ball);
    }

    #[test]
    fn test_idle_drifts_to_middle_plus_error() {
        let ball = ball_at(Vec2::new(100.0, 75.0), Vec2::new(-1.5, 0.0));
        let right = paddle_at(190, 40);
        assert_eq!(decide_step(AiPolicy::Predict, Side::Right, right, &ball, 74.0, 0), 1.0);

        let right = paddle_at(190, 80);
        assert_eq!(decide_step(AiPolicy::Predict, Side::Right, right, &ball, 74.0, 5), 0.0);
        assert_eq!(decide_step(AiPolicy::Predict, Side::Right, right, &ball, 74.0, -3), -1.0);
    }

    #[test]
    fn test_far_ball_is_chased() {
        let ball = ball_at(Vec2::new(60.0, 20.0), Vec2::new(1.5, 0.0));
        let right = paddle_at(190, 75);
        // target below, but the ball is far and above
        assert_eq!(decide_step(AiPolicy::Predict, Side::Right, right, &ball, 140.0, 0), -1.0);
    }

    #[test]
    fn test_near_ball_steers_to_target() {
        let ball = ball_at(Vec2::new(150.0, 20.0), Vec2::new(1.5, 0.0));
        let right = paddle_at(190, 75);
        assert_eq!(decide_step(AiPolicy::Predict, Side::Right, right, &ball, 140.0, 0), 1.0);
        // aim error shifts the reference point
        assert_eq!(decide_step(AiPolicy::Predict, Side::Right, right, &ball, 80.0, 5), 0.0);
    }

    #[test]
    fn test_track_ball_ignores_direction() {
        let ball = ball_at(Vec2::new(100.0, 120.0), Vec2::new(1.5, 0.0));
        let left = paddle_at(7, 75);
        assert_eq!(decide_step(AiPolicy::TrackBall, Side::Left, left, &ball, 0.0, 9), 1.0);
    }
}
