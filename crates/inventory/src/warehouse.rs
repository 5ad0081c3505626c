use tracing::debug;

use stockroom_core::{DomainError, DomainResult};

use crate::cell::Cell;
use crate::good::Good;

/// Capacity-bounded stock of goods.
///
/// Holds at most one cell per good title, in the order goods were first
/// delivered. The sum of all counts never exceeds `max_capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    cells: Vec<Cell>,
    max_capacity: u32,
}

impl Warehouse {
    pub fn new(max_capacity: u32) -> DomainResult<Self> {
        if max_capacity == 0 {
            return Err(DomainError::invalid_argument("max capacity must be positive"));
        }
        Ok(Self {
            cells: Vec::new(),
            max_capacity,
        })
    }

    /// Current stock, in order of first delivery.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn total_stock(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.count())).sum()
    }

    pub fn free_capacity(&self) -> u64 {
        u64::from(self.max_capacity) - self.total_stock()
    }

    pub fn count_of(&self, good: &Good) -> Option<u32> {
        self.position(good).map(|i| self.cells[i].count())
    }

    /// Add `amount` units of `good`.
    ///
    /// A rejected delivery leaves the stock untouched.
    pub fn delivery(&mut self, good: &Good, amount: u32) -> DomainResult<()> {
        let incoming = Cell::new(good.clone(), amount)?;

        let total = self.total_stock();
        if total + u64::from(amount) > u64::from(self.max_capacity) {
            return Err(DomainError::invalid_operation(format!(
                "delivery of {amount} x {good} exceeds capacity ({total}/{} in stock)",
                self.max_capacity
            )));
        }

        match self.position(good) {
            Some(i) => self.cells[i] = self.cells[i].merge(&incoming)?,
            None => self.cells.push(incoming),
        }

        debug!(good = %good, amount, total = total + u64::from(amount), "stock delivered");
        Ok(())
    }

    /// Take `count` units of `good` out of stock.
    ///
    /// A cell emptied by this call is dropped, so the good is no longer in stock.
    pub fn unloading(&mut self, good: &Good, count: u32) -> DomainResult<()> {
        let index = self
            .position(good)
            .ok_or_else(|| DomainError::invalid_operation(format!("{good} is not in stock")))?;

        match self.cells[index].remove(count)? {
            Some(rest) => self.cells[index] = rest,
            None => {
                self.cells.remove(index);
            }
        }

        debug!(good = %good, count, "stock unloaded");
        Ok(())
    }

    fn position(&self, good: &Good) -> Option<usize> {
        self.cells.iter().position(|c| c.good().title() == good.title())
    }
}
