//! Corpus loading: manifests naming the files of a suite, and the cache that
//! keeps their bytes resident across benchmark iterations.

pub mod cache;
pub mod manifest;

pub use cache::{load_file, CorpusCache};
pub use manifest::CorpusManifest;
