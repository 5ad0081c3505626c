//! Inventory domain module.
//!
//! This crate contains the stock-keeping rules (goods, quantity cells and a
//! capacity-bounded warehouse), implemented as deterministic in-memory logic
//! (no IO, no storage).

pub mod cell;
pub mod good;
pub mod warehouse;

pub use cell::Cell;
pub use good::Good;
pub use warehouse::Warehouse;
