//! Sample storefront session: deliver stock, display it, fill a cart, order,
//! display again.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use stockroom_inventory::{Cell, Good, Warehouse};
use stockroom_observability::{Broadcast, Gated, Sink, SinkError, WriterSink};
use stockroom_shop::{Cart, Shop};

pub mod config;

pub use config::{ConfigError, DemoConfig};

/// Display sink for a session: stdout, plus an optional file mirror that may be
/// restricted to one weekday.
pub fn display_sink(config: &DemoConfig) -> Result<Broadcast, SinkError> {
    let mut sink = Broadcast::new().with(WriterSink::stdout());

    if let Some(path) = &config.mirror_file {
        let file = WriterSink::append_to_file(path)?;
        match config.mirror_weekday {
            Some(day) => sink.push(Gated::on_weekday(file, day)),
            None => sink.push(file),
        }
    }

    Ok(sink)
}

/// Run the sample session against `display` and return the final stock.
pub fn run_session<S: Sink + ?Sized>(config: &DemoConfig, display: &mut S) -> anyhow::Result<Vec<Cell>> {
    let iphone12 = Good::new("iPhone 12")?;
    let iphone11 = Good::new("iPhone 11")?;

    let warehouse = Rc::new(RefCell::new(Warehouse::new(config.capacity)?));
    let shop = Shop::new(warehouse.clone());

    warehouse
        .borrow_mut()
        .delivery(&iphone12, 10)
        .context("initial delivery")?;
    warehouse
        .borrow_mut()
        .delivery(&iphone11, 1)
        .context("initial delivery")?;

    shop.show_available_goods(display)?;

    let mut cart = Cart::new(shop.clone());
    cart.add(&iphone12, 4)?;
    cart.show_request_goods(display)?;

    let report = cart.make_order()?;
    if !report.is_complete() {
        tracing::warn!(skipped = report.skipped.len(), "order partially fulfilled");
    }

    shop.show_available_goods(display)?;

    Ok(shop.available_goods())
}
