use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A named list of corpus files, read from JSON.
///
/// ```json
/// { "name": "gauntlet", "root": "gauntlet_corpus", "files": ["abac", "abba", "fss9"] }
/// ```
///
/// `root` is resolved against the manifest's own directory and defaults to it.
#[derive(Deserialize, Clone, Debug)]
pub struct CorpusManifest {
    pub name: String,
    #[serde(default)]
    pub root: Option<PathBuf>,
    pub files: Vec<String>,
}

impl CorpusManifest {
    /// Read and parse a manifest file, resolving `root`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let mut manifest: CorpusManifest = serde_json::from_str(&content)
            .with_context(|| format!("Invalid manifest JSON in {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        manifest.root = Some(match manifest.root.take() {
            Some(root) if root.is_absolute() => root,
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        });
        Ok(manifest)
    }

    /// Full paths of the listed files, in manifest order.
    pub fn paths(&self) -> Vec<PathBuf> {
        let root = self.root.as_deref().unwrap_or_else(|| Path::new(""));
        self.files.iter().map(|f| root.join(f)).collect()
    }
}
