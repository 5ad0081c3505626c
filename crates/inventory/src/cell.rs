use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

use crate::good::Good;

/// A quantity record: one good and a strictly positive count.
///
/// Cells are values. `merge` and `remove` never touch `self`; they return the
/// resulting cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CellRecord")]
pub struct Cell {
    good: Good,
    count: u32,
}

#[derive(Deserialize)]
struct CellRecord {
    good: Good,
    count: u32,
}

impl Cell {
    pub fn new(good: Good, count: u32) -> DomainResult<Self> {
        if count == 0 {
            return Err(DomainError::invalid_argument("count must be positive"));
        }
        Ok(Self { good, count })
    }

    pub fn good(&self) -> &Good {
        &self.good
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Combine two cells of the same good.
    pub fn merge(&self, other: &Cell) -> DomainResult<Cell> {
        if self.good != other.good {
            return Err(DomainError::invalid_operation(format!(
                "cannot merge {} into {}",
                other.good, self.good
            )));
        }
        let count = self
            .count
            .checked_add(other.count)
            .ok_or_else(|| DomainError::invalid_operation("cell count overflow"))?;
        Ok(Cell {
            good: self.good.clone(),
            count,
        })
    }

    /// Take `count` units out of this cell.
    ///
    /// Returns the remainder, or `None` when the cell is emptied exactly.
    pub fn remove(&self, count: u32) -> DomainResult<Option<Cell>> {
        if count == 0 {
            return Err(DomainError::invalid_argument("count must be positive"));
        }
        if count > self.count {
            return Err(DomainError::invalid_operation(format!(
                "cannot remove {count} x {}: only {} in stock",
                self.good, self.count
            )));
        }

        let rest = self.count - count;
        if rest == 0 {
            return Ok(None);
        }
        Ok(Some(Cell {
            good: self.good.clone(),
            count: rest,
        }))
    }
}

impl ValueObject for Cell {}

impl TryFrom<CellRecord> for Cell {
    type Error = DomainError;

    fn try_from(record: CellRecord) -> Result<Self, Self::Error> {
        Self::new(record.good, record.count)
    }
}

/// Display line: `<title>/<count>`.
impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.good, self.count)
    }
}
