pub mod config;
pub mod logging;

pub mod client_file;
pub mod digest;
pub mod fetch;
pub mod legacy;
pub mod listing;
pub mod resolve;
pub mod verify;
