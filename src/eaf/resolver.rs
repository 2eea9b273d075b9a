//! Extension point for metadata the EAF file itself does not carry.
//!
//! Speaker identity, speaker nativeness and audio locations have to come
//! from outside the annotation file. Every method defaults to `None`, which
//! the document stores as "not available".

use std::path::PathBuf;

use super::bundle::BundleTables;
use super::ids::LanguageCode;

/// Supplies per-language and per-document metadata during construction.
pub trait MetadataResolver {
    /// Name of the speaker in `language`'s transcription.
    fn speaker_name(&self, _language: &LanguageCode, _tables: &BundleTables) -> Option<String> {
        None
    }

    /// Whether the speaker of `language` speaks it natively.
    fn speaker_native(&self, _language: &LanguageCode, _tables: &BundleTables) -> Option<bool> {
        None
    }

    /// Audio files belonging to the document named `file_name`.
    fn audio_paths(&self, _file_name: &str) -> Option<Vec<PathBuf>> {
        None
    }
}

/// Resolver that knows nothing; every value is reported as not available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMetadata;

impl MetadataResolver for NoMetadata {}
