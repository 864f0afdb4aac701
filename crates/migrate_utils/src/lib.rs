pub mod env;
pub mod log;
pub mod utils;
