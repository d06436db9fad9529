//! In-memory inventory store — the single mutation path for switch and
//! port state.

mod inventory;

pub use inventory::Inventory;
