use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a [`TableConfig`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The maximum capacity cannot be zero.
    #[error("`max_capacity` cannot be zero")]
    MaxCapacityZero,
    /// The initial capacity cannot exceed the maximum capacity.
    #[error("`initial_capacity` ({initial}) exceeds `max_capacity` ({max})")]
    InitialCapacityTooLarge { initial: usize, max: usize },
}

/// Sizing configuration for a table's column storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TableConfig {
    /// Number of rows allocated up front when a table is created from column kinds.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    /// Upper bound on the number of rows any column may hold.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: usize,
}

impl TableConfig {
    /// Default number of rows allocated for an empty table.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Default upper bound on column length.
    ///
    /// Mirrors the largest array most managed runtimes can allocate, which keeps row
    /// indices representable as `i32` in the encoded search results.
    pub const DEFAULT_MAX_CAPACITY: usize = i32::MAX as usize - 8;

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_capacity == 0 {
            return Err(ValidationError::MaxCapacityZero);
        }

        if self.initial_capacity > self.max_capacity {
            return Err(ValidationError::InitialCapacityTooLarge {
                initial: self.initial_capacity,
                max: self.max_capacity,
            });
        }

        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_initial_capacity() -> usize {
    TableConfig::DEFAULT_INITIAL_CAPACITY
}

fn default_max_capacity() -> usize {
    TableConfig::DEFAULT_MAX_CAPACITY
}
