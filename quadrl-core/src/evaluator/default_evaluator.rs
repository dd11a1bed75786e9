//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Record, RecordStorage, RecordValue},
    Env, Policy,
};
use anyhow::Result;

/// Runs a fixed number of episodes and summarizes them.
///
/// The resulting [`Record`] holds `Episode return` and `Episode length`,
/// both averaged over the episodes, and the aggregates of every scalar the
/// environment recorded at its steps (see [`RecordStorage`]).
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Each episode starts with [`Env::reset_with_index`], the index being
    /// the episode number.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;
        let mut n_steps = 0usize;
        let mut storage = RecordStorage::new();

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, record) = self.env.step(&act)?;
                r_total += step.reward;
                n_steps += 1;
                storage.store(record);
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
        }

        let n = self.n_episodes.max(1) as f32;
        let mut record = storage.aggregate();
        record.insert("Episode return", RecordValue::Scalar(r_total / n));
        record.insert("Episode length", RecordValue::Scalar(n_steps as f32 / n));
        Ok(record)
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }

    /// Returns a reference to the environment used for evaluation.
    pub fn env(&self) -> &E {
        &self.env
    }
}
