// Export modules for client use and testing
pub mod address;
pub mod codec;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod rpc;
pub mod transaction;
pub mod transport;
