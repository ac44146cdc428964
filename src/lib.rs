pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use config::{load_config, VersioningConfig};
pub use domain::{release_mode, ReleaseMode, SnapshotReleaseMode, SNAPSHOT};
pub use error::{Result, VersioningError};
