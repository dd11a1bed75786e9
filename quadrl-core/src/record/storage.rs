//! Record storage and aggregation.
use super::{Record, RecordValue};
use std::collections::BTreeSet;

/// Stores records and aggregates them on request.
///
/// Scalar values found under the same key in more than one record are
/// summarized into `{key}_min`, `{key}_max`, `{key}_mean` and `{key}_median`.
/// A scalar seen only once is kept under its own key. For arrays
/// the most recent value is kept. Keys are visited in sorted order.
#[derive(Default)]
pub struct RecordStorage {
    data: Vec<Record>,
}

fn min(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::INFINITY, f32::min))
}

fn max(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::NEG_INFINITY, f32::max))
}

fn mean(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().sum::<f32>() / vs.len() as f32)
}

/// Upper median, as `vs` is sorted in place.
fn median(mut vs: Vec<f32>) -> RecordValue {
    vs.sort_by(|x, y| x.total_cmp(y));
    RecordValue::Scalar(vs[vs.len() / 2])
}

impl RecordStorage {
    /// Creates a new empty record storage.
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Stores a record in the storage.
    pub fn store(&mut self, record: Record) {
        self.data.push(record);
    }

    fn keys(&self) -> BTreeSet<String> {
        self.data
            .iter()
            .flat_map(|record| record.keys().cloned())
            .collect()
    }

    fn latest(&self, key: &str) -> Option<&RecordValue> {
        self.data.iter().rev().find_map(|record| record.get(key))
    }

    fn scalar(&self, key: &str) -> Record {
        let vs: Vec<f32> = self
            .data
            .iter()
            .filter_map(|record| match record.get(key) {
                Some(RecordValue::Scalar(v)) => Some(*v),
                _ => None,
            })
            .collect();

        if vs.len() == 1 {
            Record::from_slice(&[(key, RecordValue::Scalar(vs[0]))])
        } else {
            Record::from_slice(&[
                (format!("{}_min", key), min(&vs)),
                (format!("{}_max", key), max(&vs)),
                (format!("{}_mean", key), mean(&vs)),
                (format!("{}_median", key), median(vs)),
            ])
        }
    }

    /// Aggregates all stored records and clears the storage.
    pub fn aggregate(&mut self) -> Record {
        let mut record = Record::empty();

        for key in self.keys().iter() {
            match self.latest(key) {
                Some(RecordValue::Scalar(..)) => record.merge_inplace(self.scalar(key)),
                Some(value) => record.insert(key.clone(), value.clone()),
                None => {}
            }
        }

        self.data.clear();

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_scalars() {
        let mut storage = RecordStorage::new();
        for (i, r) in [1.0f32, 4.0, 2.0].iter().enumerate() {
            let mut record = Record::from_slice(&[("reward", RecordValue::Scalar(*r))]);
            record.insert("obs", RecordValue::Array1(vec![i as f32]));
            storage.store(record);
        }
        storage.store(Record::from_slice(&[("episode_length", RecordValue::Scalar(7.0))]));

        let record = storage.aggregate();
        assert_eq!(record.get_scalar("reward_min").unwrap(), 1.0);
        assert_eq!(record.get_scalar("reward_max").unwrap(), 4.0);
        assert!((record.get_scalar("reward_mean").unwrap() - 7.0 / 3.0).abs() < 1e-6);
        assert_eq!(record.get_scalar("reward_median").unwrap(), 2.0);
        assert_eq!(record.get_scalar("episode_length").unwrap(), 7.0);
        assert_eq!(record.get_array1("obs").unwrap(), vec![2.0]);
        assert_eq!(storage.aggregate().keys().count(), 0);
    }
}
