mod error_types;
mod inventory_types;
mod migration_types;
mod mirror_types;

pub use error_types::*;
pub use inventory_types::*;
pub use migration_types::*;
pub use mirror_types::*;
