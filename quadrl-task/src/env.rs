//! [`Env`] implementation of the hover task.
use crate::{QuadAct, QuadObs, Simulator, Task, TaskConfig};
use anyhow::Result;
use log::{info, trace};
use quadrl_core::{
    record::{Record, RecordValue},
    Env, Info, Obs, Step,
};

/// Information given at every step of the interaction with [`QuadEnv`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuadInfo {
    /// Number of simulator steps at which the goal was reached.
    pub success: usize,

    /// The vehicle crashed during the step.
    pub crashed: bool,
}

impl Info for QuadInfo {}

/// The hover task as an [`Env`].
///
/// A step of the environment is a call to [`Task::step`]. The episode is
/// terminated when the task forces it (crash or negative accumulated reward)
/// and truncated when only the simulator reports the end, or when the
/// optional step limit is reached.
///
/// The record of a step holds `obs`, `success` and `crashed`.
pub struct QuadEnv<S: Simulator> {
    task: Task<S>,

    count_steps: usize,

    max_steps: Option<usize>,
}

impl<S: Simulator> QuadEnv<S> {
    /// Wraps a task.
    pub fn new(task: Task<S>) -> Self {
        Self {
            task,
            count_steps: 0,
            max_steps: None,
        }
    }

    /// Set the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// The wrapped task.
    pub fn task(&self) -> &Task<S> {
        &self.task
    }

    /// Number of steps since the last reset.
    pub fn count_steps(&self) -> usize {
        self.count_steps
    }
}

impl<S: Simulator> Env for QuadEnv<S> {
    type Config = TaskConfig;
    type Obs = QuadObs;
    type Act = QuadAct;
    type Info = QuadInfo;

    /// Builds the task and its simulator.
    ///
    /// The simulators in this crate are deterministic, so `seed` is only logged.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        info!("Build QuadEnv with seed {}", seed);
        Ok(Self::new(Task::new(config)?).max_steps(config.max_steps))
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        trace!("QuadEnv::step()");
        let outcome = self.task.step(a.as_slice())?;

        self.count_steps += 1;
        let hit_limit = matches!(self.max_steps, Some(m) if self.count_steps >= m);
        let is_terminated = outcome.terminated;
        let is_truncated = !is_terminated && (outcome.done || hit_limit);

        let obs = QuadObs::new(outcome.next_state);
        let record = Record::from_slice(&[
            ("obs", RecordValue::Array1(obs.to_f32())),
            ("success", RecordValue::Scalar(outcome.success as f32)),
            ("crashed", RecordValue::Scalar(outcome.crashed as u8 as f32)),
        ]);
        let info = QuadInfo {
            success: outcome.success,
            crashed: outcome.crashed,
        };
        let step = Step::new(
            obs,
            a.clone(),
            outcome.reward as f32,
            is_terminated,
            is_truncated,
            info,
            QuadObs::dummy(),
        );

        Ok((step, record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("QuadEnv::reset()");
        self.count_steps = 0;
        Ok(QuadObs::new(self.task.reset()))
    }

    /// Resets the environment; `ix` does not change the initial conditions.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        trace!("QuadEnv::reset_with_index({})", ix);
        self.reset()
    }
}
