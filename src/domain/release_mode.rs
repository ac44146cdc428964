//! Release modes decide which version string is displayed for a build.
//!
//! Each mode is a stateless strategy. The caller computes the next, last
//! and current tags from the repository and picks a mode by name.

use crate::config::VersioningConfig;
use crate::domain::tag::is_blank;
use crate::error::{Result, VersioningError};

/// Computes the display version for one release mode.
pub trait ReleaseMode: Send + Sync {
    /// Name under which the mode is configured
    fn name(&self) -> &'static str;

    /// Returns the version to display given the tag state of the build.
    ///
    /// `current_tag` is `None` when the build is not on any tag state.
    fn display_version(
        &self,
        next_tag: &str,
        last_tag: &str,
        current_tag: Option<&str>,
        config: &VersioningConfig,
    ) -> Option<String>;
}

/// Snapshot release mode.
///
/// When a current tag is present, displays the next tag followed by the
/// configured snapshot suffix. Otherwise the current tag is passed
/// through untouched, blank or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotReleaseMode;

/// Shared snapshot mode instance.
pub const SNAPSHOT: SnapshotReleaseMode = SnapshotReleaseMode;

impl ReleaseMode for SnapshotReleaseMode {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn display_version(
        &self,
        next_tag: &str,
        _last_tag: &str,
        current_tag: Option<&str>,
        config: &VersioningConfig,
    ) -> Option<String> {
        if is_blank(current_tag) {
            log::trace!("Current tag {:?} is blank, passing it through", current_tag);
            return current_tag.map(str::to_string);
        }

        let version = format!("{}{}", next_tag, config.snapshot());
        log::debug!("Snapshot display version: {}", version);
        Some(version)
    }
}

/// Looks up a release mode by its configured name (case-insensitive).
pub fn release_mode(name: &str) -> Result<&'static dyn ReleaseMode> {
    match name.trim().to_lowercase().as_str() {
        "snapshot" => Ok(&SNAPSHOT),
        _ => Err(VersioningError::unknown_release_mode(name)),
    }
}
