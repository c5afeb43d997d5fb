use crate::error::{MigrateError, Result};

/// Renumbering applied to ticket numbers when the destination tracker already
/// has issues: numbers up to `until` are shifted by `offset`, numbers above it
/// pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdRemap {
    shift: Option<(u64, u64)>,
}

impl IdRemap {
    /// Every number maps to itself.
    pub fn identity() -> Self {
        Self { shift: None }
    }

    /// Both parameters or neither; a lone one is a configuration error.
    pub fn new(until: Option<u64>, offset: Option<u64>) -> Result<Self> {
        match (until, offset) {
            (None, None) => Ok(Self::identity()),
            (Some(until), Some(offset)) => Ok(Self { shift: Some((until, offset)) }),
            _ => Err(MigrateError::RemapHalfConfigured),
        }
    }

    pub fn remap(&self, number: u64) -> u64 {
        match self.shift {
            Some((until, offset)) if number <= until => number + offset,
            _ => number,
        }
    }
}
