//! Pipeline stages: scan the source, resolve name conflicts, transfer the
//! batch, dispose of originals, and report the remaining inventory.

pub mod dispose;
pub mod inventory;
pub mod resolve;
pub mod scan;
pub mod transfer;

pub use dispose::{DisposalManager, DisposalOutcome};
pub use inventory::InventoryReporter;
pub use resolve::ConflictResolver;
pub use scan::DirectoryHandle;
pub use transfer::{TransferEngine, TransferOutcome};
