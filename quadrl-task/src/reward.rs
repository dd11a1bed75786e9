//! Reward of the hover task.
use crate::Pose;

/// Weight of the saturated positional error.
pub const ERROR_WEIGHT: f64 = 0.4;

/// Subtracted from the reward when the vehicle is below the ground.
pub const CRASH_PENALTY: f64 = 10.0;

/// Added to the reward when the vehicle hovers near the target.
pub const GOAL_BONUS: f64 = 5.0;

/// The vehicle must be strictly above this altitude to reach the goal.
pub const GOAL_MIN_ALTITUDE: f64 = 30.0;

/// The positional error must be strictly below this value to reach the goal.
pub const GOAL_MAX_ERROR: f64 = 20.0;

/// Reward at a single simulator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardOutcome {
    /// Reward value.
    pub reward: f64,

    /// The vehicle is below the ground.
    pub crashed: bool,

    /// The vehicle is high enough and close enough to the target.
    pub goal: bool,
}

/// Mean absolute per-axis distance between the position in `pose` and `target`.
pub fn positional_error(pose: &Pose, target: &[f64; 3]) -> f64 {
    pose[..3]
        .iter()
        .zip(target.iter())
        .map(|(p, t)| (p - t).abs())
        .sum::<f64>()
        / 3.0
}

/// Computes the reward of `pose` with respect to `target`.
///
/// The base reward is `1 - 0.4 * tanh(e)` where `e` is the [`positional_error`].
/// The crash and goal checks are independent of each other and applied in this order.
pub fn evaluate(pose: &Pose, target: &[f64; 3]) -> RewardOutcome {
    let error = positional_error(pose, target);
    let z = pose[2];
    let mut reward = 1.0 - ERROR_WEIGHT * error.tanh();

    let crashed = z < 0.0;
    if crashed {
        reward -= CRASH_PENALTY;
    }

    let goal = z > GOAL_MIN_ALTITUDE && error < GOAL_MAX_ERROR;
    if goal {
        reward += GOAL_BONUS;
    }

    RewardOutcome {
        reward,
        crashed,
        goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: [f64; 3] = [0.0, 0.0, 40.0];

    fn base(error: f64) -> f64 {
        1.0 - ERROR_WEIGHT * error.tanh()
    }

    #[test]
    fn test_at_target() {
        let outcome = evaluate(&[0.0, 0.0, 40.0, 0.0, 0.0, 0.0], &TARGET);
        assert_eq!(
            outcome,
            RewardOutcome {
                reward: 6.0,
                crashed: false,
                goal: true
            }
        );
    }

    #[test]
    fn test_below_ground() {
        let pose = [0.0, 0.0, -1.0, 0.0, 0.0, 0.0];
        let outcome = evaluate(&pose, &TARGET);
        let error = positional_error(&pose, &TARGET);
        assert_eq!(error, 41.0 / 3.0);
        assert!(outcome.crashed);
        assert!(!outcome.goal);
        assert!((outcome.reward - (base(error) - CRASH_PENALTY)).abs() < 1e-12);
    }

    #[test]
    fn test_goal_band() {
        // High enough but too far away.
        let far = evaluate(&[30.0, 30.0, 31.0, 0.0, 0.0, 0.0], &TARGET);
        assert!(!far.goal && !far.crashed);

        // Close enough but too low.
        let low = evaluate(&[0.0, 0.0, 30.0, 0.0, 0.0, 0.0], &TARGET);
        assert!(!low.goal && !low.crashed);
        assert!((low.reward - base(10.0 / 3.0)).abs() < 1e-12);

        let near = evaluate(&[5.0, -5.0, 35.0, 1.0, 2.0, 3.0], &TARGET);
        assert!(near.goal);
        assert!((near.reward - (base(5.0) + GOAL_BONUS)).abs() < 1e-12);
    }

    #[test]
    fn test_angles_are_ignored() {
        let a = evaluate(&[1.0, 2.0, 20.0, 0.0, 0.0, 0.0], &TARGET);
        let b = evaluate(&[1.0, 2.0, 20.0, 3.1, -1.2, 0.4], &TARGET);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tanh_matches_logistic_form() {
        for i in 0..200 {
            let x = i as f64 * 0.25;
            let logistic = 2.0 / (1.0 + (-2.0 * x).exp()) - 1.0;
            assert!((x.tanh() - logistic).abs() < 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn test_monotonic_in_error() {
        // z is fixed at 10, outside of both the crash and the goal band.
        let mut prev = f64::INFINITY;
        for i in 0..100 {
            let x = i as f64 * 0.5;
            let outcome = evaluate(&[x, 0.0, 10.0, 0.0, 0.0, 0.0], &TARGET);
            assert!(!outcome.crashed && !outcome.goal);
            assert!(outcome.reward <= prev);
            prev = outcome.reward;
        }
    }

    #[test]
    fn test_custom_target() {
        let target = [10.0, -10.0, 50.0];
        let outcome = evaluate(&[10.0, -10.0, 50.0, 0.0, 0.0, 0.0], &target);
        assert_eq!(positional_error(&[10.0, -10.0, 50.0, 0.0, 0.0, 0.0], &target), 0.0);
        assert_eq!(outcome.reward, 6.0);
    }
}
