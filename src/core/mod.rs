// src/core/mod.rs
//! Core services: configuration, file system access and the backend client

pub mod config_manager;
pub mod fs_ops;
pub mod service_client;
pub mod transport;

pub use config_manager::{ConfigManager, ServiceConfig};
pub use fs_ops::FsOps;
pub use service_client::ServiceClient;
pub use transport::AnalysisTransport;
