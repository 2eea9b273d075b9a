//! The top-level document model.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::bundle::LanguageBundle;
use super::ids::LanguageCode;
use super::join::{join_bundle, JoinedRow};
use super::metrics::select_original;
use super::raw::{Decoration, RawEaf};
use super::resolver::MetadataResolver;
use super::tiers::{classify_tiers, ClassifyOptions};
use super::time_slots::TimeSlotTable;
use crate::error::EafError;

/// A fully validated EAF document.
///
/// All derived values are computed once while the document is built; the
/// document cannot be modified afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    file_name: String,
    duration_ms: u64,
    original_language: Option<LanguageCode>,
    speaker_is_native: Option<bool>,
    audio_paths: Option<Vec<PathBuf>>,
    /// Bundles in tier discovery order.
    languages: Vec<LanguageBundle>,
    time_slots: TimeSlotTable,
    decoration: Decoration,
}

impl Document {
    /// Builds a document from a parsed EAF file.
    ///
    /// Fails on the first structural or reference error; nothing partial is
    /// returned.
    pub fn assemble(
        raw: &RawEaf,
        file_name: impl Into<String>,
        opts: &ClassifyOptions,
        resolver: &dyn MetadataResolver,
    ) -> Result<Self, EafError> {
        let file_name = file_name.into();
        let time_slots = TimeSlotTable::from_slots(&raw.time_slots)?;
        log::debug!("{}: {} time slot(s)", file_name, time_slots.len());

        let groups = classify_tiers(&raw.tiers, opts)?;

        let mut languages = groups
            .iter()
            .map(|group| LanguageBundle::assemble(group, &time_slots, resolver))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen_ids = HashSet::new();
        for bundle in &languages {
            for id in bundle.tables().annotation_ids() {
                if !seen_ids.insert(id) {
                    return Err(EafError::DuplicateAnnotationId { id: id.to_string() });
                }
            }
        }

        let original = select_original(languages.iter().map(|b| b.translation_percentage()));
        let mut original_language = None;
        let mut speaker_is_native = None;
        if let Some(idx) = original {
            let bundle = &mut languages[idx];
            bundle.mark_original();
            original_language = Some(bundle.language().clone());
            speaker_is_native = bundle.speaker_native();
        }
        log::debug!(
            "{}: original language {}",
            file_name,
            original_language
                .as_ref()
                .map(LanguageCode::as_str)
                .unwrap_or("<none>")
        );

        let audio_paths = resolver.audio_paths(&file_name);

        Ok(Self {
            duration_ms: time_slots.max_value(),
            file_name,
            original_language,
            speaker_is_native,
            audio_paths,
            languages,
            time_slots,
            decoration: raw.decoration.clone(),
        })
    }

    /// Source file name without directory and `.eaf` extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Largest time slot value in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Code of the least-translated language, `None` only without languages.
    pub fn original_language(&self) -> Option<&LanguageCode> {
        self.original_language.as_ref()
    }

    /// Nativeness of the original-language speaker, if a resolver knew it.
    pub fn speaker_is_native(&self) -> Option<bool> {
        self.speaker_is_native
    }

    /// Audio files for this document, if a resolver supplied them.
    pub fn audio_paths(&self) -> Option<&[PathBuf]> {
        self.audio_paths.as_deref()
    }

    pub fn languages(&self) -> &[LanguageBundle] {
        &self.languages
    }

    pub fn language_codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.iter().map(LanguageBundle::language)
    }

    pub fn bundle(&self, code: &str) -> Option<&LanguageBundle> {
        self.languages.iter().find(|b| b.language().as_str() == code)
    }

    pub fn original_bundle(&self) -> Option<&LanguageBundle> {
        self.languages.iter().find(|b| b.is_original())
    }

    pub fn time_slots(&self) -> &TimeSlotTable {
        &self.time_slots
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Denormalized view of one language; see [`join_bundle`].
    pub fn joined(&self, code: &str) -> Result<Vec<JoinedRow>, EafError> {
        self.bundle(code)
            .map(join_bundle)
            .ok_or_else(|| EafError::UnknownLanguage(code.to_string()))
    }
}

/// File name without directory and extension, as stored on a document.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
