mod inventory_service;
mod key_service;
mod ledger_service;
mod migration_service;
mod replication_service;
mod source_service;

pub use inventory_service::*;
pub use key_service::*;
pub use ledger_service::*;
pub use migration_service::*;
pub use replication_service::*;
pub use source_service::*;
