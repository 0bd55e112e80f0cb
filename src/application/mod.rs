//! Application layer - Use cases and orchestration

pub mod find_log;
pub mod open_log;
pub mod sync_log;

pub use find_log::FindLogService;
pub use open_log::OpenLogService;
pub use sync_log::{SyncLogService, SyncReport, SyncStep};
