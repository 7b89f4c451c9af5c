use crate::{DEFAULT_BYTE_CAPACITY, DEFAULT_ENTRY_CAPACITY, LogError, Result};

/// The two independent bounds a [`ChatLog`](crate::ChatLog) enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCapacity {
    /// Maximum sum of live payload lengths
    pub byte_capacity: usize,
    /// Maximum number of live entries
    pub entry_capacity: usize,
}

impl LogCapacity {
    #[track_caller]
    pub fn new(byte_capacity: usize, entry_capacity: usize) -> Result<Self> {
        if byte_capacity == 0 {
            return Err(LogError::invalid_capacity("byte_capacity must be at least 1"));
        }
        if entry_capacity == 0 {
            return Err(LogError::invalid_capacity(
                "entry_capacity must be at least 1",
            ));
        }

        Ok(Self {
            byte_capacity,
            entry_capacity,
        })
    }
}

impl Default for LogCapacity {
    fn default() -> Self {
        Self {
            byte_capacity: DEFAULT_BYTE_CAPACITY,
            entry_capacity: DEFAULT_ENTRY_CAPACITY,
        }
    }
}
