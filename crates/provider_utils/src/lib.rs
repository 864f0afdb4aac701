pub mod enums;
pub mod ledger_providers;
pub mod mirror_providers;
pub mod networks;
