#![warn(missing_docs)]
//! Core primitives for reinforcement learning tasks in quadrl.
//!
//! This crate does not depend on a concrete vehicle or simulator. It provides
//! the traits an environment implements ([`Env`], [`Obs`], [`Act`], [`Info`]),
//! the [`Step`] object emitted at every interaction, a [`Policy`] abstraction
//! for whatever drives the environment, and a small recording system
//! ([`record`]) used to collect per-step and per-episode values.
//!
//! Episode-level bookkeeping lives on the caller side, in
//! [`util::eval_with_recorder`] and [`DefaultEvaluator`].
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
