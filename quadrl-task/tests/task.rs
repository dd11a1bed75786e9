use anyhow::Result;
use quadrl_task::{
    reward::{CRASH_PENALTY, GOAL_BONUS},
    OutOfBounds, Pose, RotorSpeeds, ScriptedSim, SimConfig, Simulator, Task, TaskConfig,
    TaskError, ACTION_REPEAT,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn at(z: f64) -> Pose {
    [0.0, 0.0, z, 0.0, 0.0, 0.0]
}

fn scripted_task(script: Vec<Pose>) -> Task<ScriptedSim> {
    let sim = ScriptedSim::new(&SimConfig::default()).with_script(script);
    Task::with_simulator(sim, None).unwrap()
}

/// Reports done at a given step, to check how the task combines done flags.
struct DoneAt {
    pose: Pose,
    n: usize,
    done_at: usize,
}

impl Simulator for DoneAt {
    fn build(config: &SimConfig) -> Result<Self> {
        Ok(Self {
            pose: config.init_pose,
            n: 0,
            done_at: usize::MAX,
        })
    }

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn advance(&mut self, _rotor_speeds: &RotorSpeeds) -> bool {
        self.n += 1;
        self.n == self.done_at
    }

    fn reset(&mut self) {
        self.n = 0;
    }
}

#[test]
fn test_sizes() -> Result<()> {
    let task = Task::<ScriptedSim>::new(&TaskConfig::default())?;
    assert_eq!(task.action_repeat(), 3);
    assert_eq!(task.state_size(), 18);
    assert_eq!(task.action_size(), 4);
    assert_eq!(task.action_low(), 0.0);
    assert_eq!(task.action_high(), 900.0);
    assert_eq!(task.target_pos(), &[0.0, 0.0, 40.0]);
    Ok(())
}

#[test]
fn test_reset_tiles_initial_pose() -> Result<()> {
    init();
    let init_pose = [1.0, 2.0, 10.0, 0.1, 0.2, 0.3];
    let config = TaskConfig::default().sim(SimConfig::default().init_pose(init_pose));
    let mut task = Task::<ScriptedSim>::new(&config)?;

    let state = task.reset();
    assert_eq!(state.len(), 18);
    for pose in state.chunks(6) {
        assert_eq!(pose, &init_pose[..]);
    }
    Ok(())
}

#[test]
fn test_get_reward_at_target() {
    let mut task = scripted_task(vec![at(40.0)]);
    task.reset();
    task.step(&[400.0; 4]).unwrap();

    let outcome = task.get_reward();
    assert_eq!(outcome.reward, 6.0);
    assert!(outcome.goal);
    assert!(!outcome.crashed);
}

#[test]
fn test_step_hovering_at_target() -> Result<()> {
    init();
    let mut task = scripted_task(vec![at(40.0)]);
    task.reset();

    let outcome = task.step(&[400.0; 4])?;
    assert_eq!(outcome.next_state, at(40.0).repeat(3));
    assert_eq!(outcome.reward, 18.0);
    assert_eq!(outcome.success, ACTION_REPEAT);
    assert!(!outcome.done);
    assert!(!outcome.crashed);
    Ok(())
}

#[test]
fn test_step_records_poses_in_order() -> Result<()> {
    let mut task = scripted_task(vec![at(11.0), at(12.0), at(13.0)]);
    task.reset();

    let outcome = task.step(&[400.0; 4])?;
    let zs: Vec<f64> = outcome.next_state.chunks(6).map(|p| p[2]).collect();
    assert_eq!(zs, vec![11.0, 12.0, 13.0]);
    assert_eq!(task.sim().last_rotor_speeds(), Some(&[400.0; 4]));
    Ok(())
}

#[test]
fn test_crash_latches_done() -> Result<()> {
    init();
    // Crash at the first simulator step, then back at the target.
    let mut task = scripted_task(vec![at(-1.0), at(40.0), at(40.0)]);
    task.reset();

    let outcome = task.step(&[0.0; 4])?;
    assert_eq!(outcome.next_state.len(), 18);
    assert!(outcome.crashed);
    assert!(outcome.terminated);
    assert!(outcome.done);
    assert_eq!(outcome.success, 2);

    let crash_reward = task_reward_at(-1.0);
    assert!((outcome.reward - (crash_reward + 12.0)).abs() < 1e-12);
    assert!(outcome.reward > 0.0);
    Ok(())
}

fn task_reward_at(z: f64) -> f64 {
    quadrl_task::reward::evaluate(&at(z), &[0.0, 0.0, 40.0]).reward
}

#[test]
fn test_crash_penalty() {
    let below = task_reward_at(-1.0);
    let error = 41.0 / 3.0;
    let base = 1.0 - 0.4 * f64::tanh(error);
    assert!((below - (base - CRASH_PENALTY)).abs() < 1e-12);
    assert!((task_reward_at(40.0) - (1.0 + GOAL_BONUS)).abs() < 1e-12);
}

#[test]
fn test_done_from_simulator_is_kept() -> Result<()> {
    let sim = DoneAt {
        pose: at(10.0),
        n: 0,
        done_at: 1,
    };
    let mut task = Task::with_simulator(sim, None)?;
    task.reset();

    let outcome = task.step(&[400.0; 4])?;
    assert!(outcome.done);
    assert!(!outcome.terminated);
    assert_eq!(outcome.next_state.len(), 18);
    Ok(())
}

#[test]
fn test_runtime_ends_episode() -> Result<()> {
    let config = TaskConfig::default().sim(SimConfig::default().runtime(0.1));
    let mut task = Task::<ScriptedSim>::new(&config)?;
    task.reset();

    // 0.06 s after the first step, 0.12 s after the second.
    assert!(!task.step(&[400.0; 4])?.done);
    let outcome = task.step(&[400.0; 4])?;
    assert!(outcome.done);
    assert!(!outcome.terminated);

    task.reset();
    assert_eq!(task.sim().time(), 0.0);
    Ok(())
}

#[test]
fn test_invalid_action_leaves_simulator_untouched() -> Result<()> {
    let mut task = scripted_task(vec![at(20.0)]).out_of_bounds(OutOfBounds::Reject);
    task.reset();

    let err = task.step(&[400.0; 3]).unwrap_err();
    assert!(matches!(err, TaskError::InvalidAction(_)));
    let err = task.step(&[400.0, 400.0, 400.0, 1000.0]).unwrap_err();
    assert!(matches!(err, TaskError::InvalidAction(_)));
    assert_eq!(task.sim().n_steps(), 0);
    Ok(())
}

#[test]
fn test_clamped_action_reaches_simulator() -> Result<()> {
    let mut task = scripted_task(vec![at(20.0)]);
    task.reset();
    task.step(&[-1.0, 100.0, 901.0, 900.0])?;
    assert_eq!(task.sim().last_rotor_speeds(), Some(&[0.0, 100.0, 900.0, 900.0]));
    Ok(())
}

#[test]
fn test_invalid_target() {
    let sim = ScriptedSim::new(&SimConfig::default());
    let res = Task::with_simulator(sim, Some(&[0.0, 40.0][..]));
    assert!(matches!(res, Err(TaskError::InvalidConfiguration(_))));

    let config = TaskConfig::default().target_pos(vec![0.0, 0.0, 40.0, 1.0]);
    assert!(Task::<ScriptedSim>::new(&config).is_err());
}

#[test]
fn test_custom_target() -> Result<()> {
    let config = TaskConfig::default().target_pos(vec![5.0, 5.0, 35.0]);
    let mut task = Task::<ScriptedSim>::new(&config)?;
    assert_eq!(task.target_pos(), &[5.0, 5.0, 35.0]);

    // Initial pose (0, 0, 10) is 35 / 3 away and not high enough for the goal.
    task.reset();
    let outcome = task.get_reward();
    assert!(!outcome.goal && !outcome.crashed);
    assert!((outcome.reward - (1.0 - 0.4 * (35.0f64 / 3.0).tanh())).abs() < 1e-12);
    Ok(())
}
