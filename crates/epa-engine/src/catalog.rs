// ABOUTME: Immutable exercise catalog keyed by exercise identifier
// ABOUTME: ExerciseLookup is the read-only seam the aggregator and gates depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::Arc;

use epa_core::models::ExerciseRecord;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two records share an identifier
    #[error("duplicate exercise id '{exercise_id}'")]
    DuplicateId {
        /// Repeated identifier
        exercise_id: String,
    },
    /// A record has an empty identifier
    #[error("exercise record with empty id")]
    EmptyId,
    /// A contact rate is negative or not finite
    #[error("exercise '{exercise_id}' has invalid contact rate {rate}")]
    InvalidContactRate {
        /// Offending record
        exercise_id: String,
        /// Offending rate
        rate: f64,
    },
}

/// Read-only access to exercise records
pub trait ExerciseLookup {
    /// Record for `exercise_id`, if present
    fn lookup(&self, exercise_id: &str) -> Option<&ExerciseRecord>;
}

/// Exercise catalog loaded once per process
///
/// Never mutated after construction. Hosts that refresh the catalog build a
/// new one and swap the whole `Arc`; in-flight evaluations keep the snapshot
/// they started with.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    records: BTreeMap<String, ExerciseRecord>,
}

impl ExerciseCatalog {
    /// Build a catalog, validating every record
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate or empty identifiers and for negative
    /// or non-finite contact rates.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ExerciseRecord>,
    {
        let mut map = BTreeMap::new();
        for record in records {
            if record.exercise_id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if let Some(rate) = record.contacts_per_rep {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(CatalogError::InvalidContactRate {
                        exercise_id: record.exercise_id,
                        rate,
                    });
                }
            }
            if map.contains_key(&record.exercise_id) {
                return Err(CatalogError::DuplicateId {
                    exercise_id: record.exercise_id,
                });
            }
            map.insert(record.exercise_id.clone(), record);
        }
        Ok(Self { records: map })
    }

    /// Wrap in an `Arc` for sharing across evaluations
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &ExerciseRecord> {
        self.records.values()
    }
}

impl ExerciseLookup for ExerciseCatalog {
    fn lookup(&self, exercise_id: &str) -> Option<&ExerciseRecord> {
        self.records.get(exercise_id)
    }
}

impl<T: ExerciseLookup + ?Sized> ExerciseLookup for Arc<T> {
    fn lookup(&self, exercise_id: &str) -> Option<&ExerciseRecord> {
        (**self).lookup(exercise_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use epa_core::models::Band;

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = ExerciseCatalog::from_records([
            ExerciseRecord::new("SQ", "Squat", Band::Band2),
            ExerciseRecord::new("SQ", "Squat again", Band::Band2),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateId {
                exercise_id: "SQ".to_owned()
            }
        );
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = ExerciseCatalog::from_records([
            ExerciseRecord::new("PJ", "Pogo", Band::Band0).plyometric(-1.0)
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidContactRate { .. })
        ));
    }

    #[test]
    fn test_lookup_through_arc() {
        let catalog = ExerciseCatalog::from_records([ExerciseRecord::new("SQ", "Squat", Band::Band2)])
            .unwrap()
            .into_shared();
        assert!(catalog.lookup("SQ").is_some());
        assert!(catalog.lookup("sq").is_none());
        assert_eq!(catalog.len(), 1);
    }
}
