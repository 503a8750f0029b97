pub mod client;
pub mod config;
pub mod global;
pub mod http;
pub mod opportunity;
pub mod util;
