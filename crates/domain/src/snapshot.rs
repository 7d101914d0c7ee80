//! Snapshot — a point-in-time view of the target application's UI tree.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::SnapshotId;
use crate::node::UiNode;
use crate::time::{Timestamp, now};

/// Package/bundle identity of the application that produced a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageName(String);

impl PackageName {
    /// Wrap a non-empty package name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPackageName`] when `name` is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyPackageName);
        }
        Ok(Self(name))
    }

    /// The package name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A read-only UI-tree snapshot tagged with its originating application.
///
/// The host re-delivers a snapshot on every UI change of the target
/// application, which is what gives the automation its implicit retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Identifier for log correlation.
    pub id: SnapshotId,
    /// Identity of the application whose UI this tree describes.
    pub package: PackageName,
    /// Root of the element tree.
    pub root: UiNode,
    /// When the snapshot was taken.
    pub captured_at: Timestamp,
}

impl Snapshot {
    /// Capture a snapshot of `root` on behalf of `package`.
    #[must_use]
    pub fn new(package: PackageName, root: UiNode) -> Self {
        Self {
            id: SnapshotId::new(),
            package,
            root,
            captured_at: now(),
        }
    }
}
