//! Types and traits for recording values observed while running episodes.
//!
//! * [`Record`] - A container of key-value pairs
//! * [`RecordValue`] - The values a [`Record`] can hold
//! * [`Recorder`] - Destination of records
//! * [`RecordStorage`] - Stores records and aggregates scalar values
//! * [`BufferedRecorder`] - Keeps records in memory
//! * [`NullRecorder`] - Discards all records
//!
//! # Basic Usage
//!
//! ```rust
//! use quadrl_core::record::{Record, RecordValue};
//!
//! // following values are obtained from an environment step in reality
//! let step = 1;
//! let obs = vec![0f32, 0.0, 10.0, 0.0, 0.0, 0.0];
//! let reward = 0.6f32;
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(step as f32));
//! record.insert("reward", RecordValue::Scalar(reward));
//! record.insert("obs", RecordValue::Array1(obs));
//! assert_eq!(record.get_scalar("reward").unwrap(), 0.6);
//! assert_eq!(record.get_array1("obs").unwrap().len(), 6);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;
mod storage;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
pub use storage::RecordStorage;
