use std::cell::RefCell;
use std::rc::Rc;

use stockroom_core::DomainResult;
use stockroom_inventory::{Cell, Good, Warehouse};
use stockroom_observability::{Sink, SinkError};

/// Warehouse handle shared between its owner (who delivers stock) and the shops
/// selling from it. Single-threaded only.
pub type SharedWarehouse = Rc<RefCell<Warehouse>>;

/// Storefront over one warehouse. Holds no stock of its own.
///
/// Cloning a shop yields another facade over the same warehouse.
#[derive(Debug, Clone)]
pub struct Shop {
    warehouse: SharedWarehouse,
}

impl Shop {
    pub fn new(warehouse: SharedWarehouse) -> Self {
        Self { warehouse }
    }

    pub fn warehouse(&self) -> &SharedWarehouse {
        &self.warehouse
    }

    /// Snapshot of the current stock, in warehouse order.
    pub fn available_goods(&self) -> Vec<Cell> {
        self.warehouse.borrow().cells().to_vec()
    }

    /// Emit one `<title>/<count>` line per stocked good.
    pub fn show_available_goods<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), SinkError> {
        for cell in self.available_goods() {
            sink.emit(&cell.to_string())?;
        }
        Ok(())
    }

    /// Whether the warehouse holds at least `request.count()` units of the
    /// requested good.
    pub fn try_get_good(&self, request: &Cell) -> bool {
        self.warehouse
            .borrow()
            .cells()
            .iter()
            .any(|stored| {
                stored.good().title() == request.good().title() && request.count() <= stored.count()
            })
    }

    pub fn remove(&self, good: &Good, count: u32) -> DomainResult<()> {
        self.warehouse.borrow_mut().unloading(good, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_observability::MemorySink;

    fn good(title: &str) -> Good {
        Good::new(title).unwrap()
    }

    fn stocked_shop() -> Shop {
        let mut warehouse = Warehouse::new(20).unwrap();
        warehouse.delivery(&good("iPhone 12"), 10).unwrap();
        warehouse.delivery(&good("iPhone 11"), 1).unwrap();
        Shop::new(Rc::new(RefCell::new(warehouse)))
    }

    #[test]
    fn shows_available_goods_as_lines() {
        let shop = stocked_shop();
        let mut sink = MemorySink::new();

        shop.show_available_goods(&mut sink).unwrap();

        assert_eq!(sink.lines(), vec!["iPhone 12/10".to_string(), "iPhone 11/1".to_string()]);
    }

    #[test]
    fn try_get_good_checks_title_and_quantity() {
        let shop = stocked_shop();

        assert!(shop.try_get_good(&Cell::new(good("iPhone 12"), 10).unwrap()));
        assert!(shop.try_get_good(&Cell::new(good("iPhone 12"), 1).unwrap()));
        assert!(!shop.try_get_good(&Cell::new(good("iPhone 12"), 11).unwrap()));
        assert!(!shop.try_get_good(&Cell::new(good("iPhone 13"), 1).unwrap()));
    }

    #[test]
    fn remove_delegates_to_warehouse() {
        let shop = stocked_shop();

        shop.remove(&good("iPhone 12"), 4).unwrap();
        assert_eq!(shop.warehouse().borrow().count_of(&good("iPhone 12")), Some(6));

        let err = shop.remove(&good("iPhone 13"), 1).unwrap_err();
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn clones_share_the_warehouse() {
        let shop = stocked_shop();
        let other = shop.clone();

        other.remove(&good("iPhone 11"), 1).unwrap();

        assert_eq!(shop.available_goods().len(), 1);
        assert!(Rc::ptr_eq(shop.warehouse(), other.warehouse()));
    }

    #[test]
    fn sees_deliveries_made_through_the_owner_handle() {
        let warehouse = Rc::new(RefCell::new(Warehouse::new(5).unwrap()));
        let shop = Shop::new(warehouse.clone());
        let request = Cell::new(good("Pixel 8"), 2).unwrap();
        assert!(!shop.try_get_good(&request));

        warehouse.borrow_mut().delivery(&good("Pixel 8"), 3).unwrap();

        assert!(shop.try_get_good(&request));
    }
}
