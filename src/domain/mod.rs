//! Domain logic - pure version display rules independent of git operations

pub mod release_mode;
pub mod tag;

pub use release_mode::{release_mode, ReleaseMode, SnapshotReleaseMode, SNAPSHOT};
pub use tag::is_blank;
