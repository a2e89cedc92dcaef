pub mod config;
pub mod contracts;
pub mod deployer;
pub mod error;
pub mod networks;
pub mod report;
pub mod utils;
