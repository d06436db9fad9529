// ── Mutation requests ──
//
// All write operations against the inventory are expressed as typed
// request structs and routed through `store::Inventory`, which owns the
// policy gate. Partial updates use `Option` fields; `None` means "leave
// as is".

pub mod requests;

pub use requests::{CreateSwitchRequest, PortUpdate, ScanTarget, SwitchUpdate};
