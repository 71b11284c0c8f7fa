use std::path::{Path, PathBuf};

/// Base directory every named asset is resolved against.
///
/// Resolved once at startup and passed explicitly to whatever needs to locate assets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Use `root` as the base assets directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The base directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path of asset `name`: `root / name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
