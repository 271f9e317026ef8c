//! Tree reconciliation
//!
//! - **tree**: the TreeSynchronizer pass (traverse, copy, prune)
//! - **report**: counters and absorbed failures of a pass

mod report;
mod tree;

pub use report::PassReport;
pub use tree::TreeSynchronizer;
