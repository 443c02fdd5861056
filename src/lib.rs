pub mod audit;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod report;
pub mod taxonomy;

pub use audit::AuditRunner;
pub use config::{AuditMode, AuditOptions, Config};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use report::{CsvRenderer, Renderer, TableRenderer};
