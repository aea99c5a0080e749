pub mod catalog;
pub mod cli;
pub mod config;
pub mod data;
pub mod lookup;
pub mod server;

pub use catalog::Catalog;
