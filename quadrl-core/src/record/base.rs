//! Base implementation of records.
use crate::error::QuadrlError;
use std::collections::{hash_map::Keys, HashMap};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, e.g., a reward or a success count.
    Scalar(f32),

    /// A 1-dimensional array of floating-point values, e.g., an observation.
    Array1(Vec<f32>),
}

/// A container for storing key-value pairs of various data types.
///
/// # Examples
///
/// ```rust
/// use quadrl_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_slice(&[("reward", RecordValue::Scalar(0.5))]);
/// record.insert("success", RecordValue::Scalar(1.0));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges another record into this one in place.
    ///
    /// If both records contain the same key, the value from `record` wins.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, QuadrlError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(QuadrlError::RecordValueTypeError("Scalar".to_string())),
            None => Err(QuadrlError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, QuadrlError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(QuadrlError::RecordValueTypeError("Array1".to_string())),
            None => Err(QuadrlError::RecordKeyError(k.to_string())),
        }
    }
}
