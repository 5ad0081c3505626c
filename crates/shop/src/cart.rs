use tracing::{debug, info};

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{Cell, Good};
use stockroom_observability::{Sink, SinkError};

use crate::shop::Shop;

/// Outcome of [`Cart::make_order`].
///
/// Entries whose goods were no longer available at order time are listed in
/// `skipped`; they are not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderReport {
    pub fulfilled: Vec<Cell>,
    pub skipped: Vec<Cell>,
}

impl OrderReport {
    /// True when every cart entry was removed from stock.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A pending selection of goods bound to one shop.
///
/// Entries are only appended. Adding checks live availability but reserves
/// nothing; stock may change before the order is made.
#[derive(Debug, Clone)]
pub struct Cart {
    cells: Vec<Cell>,
    shop: Shop,
}

impl Cart {
    pub fn new(shop: Shop) -> Self {
        Self {
            cells: Vec::new(),
            shop,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Request `amount` units of `good`.
    ///
    /// Fails without touching the cart if the shop cannot currently cover the
    /// request on its own (earlier entries for the same good are not counted).
    pub fn add(&mut self, good: &Good, amount: u32) -> DomainResult<()> {
        let request = Cell::new(good.clone(), amount)?;

        if !self.shop.try_get_good(&request) {
            return Err(DomainError::invalid_operation(format!(
                "{request} is not available"
            )));
        }

        self.cells.push(request);
        Ok(())
    }

    /// Emit one `<title>/<count>` line per requested entry.
    pub fn show_request_goods<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), SinkError> {
        for cell in &self.cells {
            sink.emit(&cell.to_string())?;
        }
        Ok(())
    }

    /// Remove every still-available entry from stock, in insertion order.
    ///
    /// No all-or-nothing guarantee: entries removed before a skipped one stay
    /// removed. The cart keeps its entries, so calling this again re-attempts
    /// all of them.
    pub fn make_order(&self) -> DomainResult<OrderReport> {
        let mut report = OrderReport::default();

        for cell in &self.cells {
            if self.shop.try_get_good(cell) {
                self.shop.remove(cell.good(), cell.count())?;
                report.fulfilled.push(cell.clone());
            } else {
                debug!(entry = %cell, "cart entry no longer available; skipped");
                report.skipped.push(cell.clone());
            }
        }

        info!(
            fulfilled = report.fulfilled.len(),
            skipped = report.skipped.len(),
            "order made"
        );
        Ok(report)
    }
}
