//! Storefront module.
//!
//! A [`Shop`] is a thin facade over a shared [`Warehouse`]; a [`Cart`] collects
//! requested goods against a shop and commits them as an order.
//!
//! [`Warehouse`]: stockroom_inventory::Warehouse

pub mod cart;
pub mod shop;

pub use cart::{Cart, OrderReport};
pub use shop::{SharedWarehouse, Shop};
