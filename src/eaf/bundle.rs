//! Per-language bundles: four annotation tables plus derived scalars.

use std::collections::HashSet;

use serde::Serialize;

use super::ids::{AnnotationId, LanguageCode};
use super::metrics;
use super::resolver::MetadataResolver;
use super::tables::{
    build_reference_table, build_transcription_table, normalize_flags, FlagRow, ReferenceRow,
    TranscriptionRow,
};
use super::tiers::TierGroup;
use super::time_slots::TimeSlotTable;
use crate::error::EafError;

/// The four tables of one language.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BundleTables {
    pub transcription: Vec<TranscriptionRow>,
    pub confidence: Vec<ReferenceRow>,
    pub is_translation: Vec<FlagRow>,
    pub manually_corrected: Vec<FlagRow>,
}

impl BundleTables {
    /// Builds all four tables for `group` and normalizes the boolean columns.
    pub fn from_group(group: &TierGroup<'_>, time_slots: &TimeSlotTable) -> Result<Self, EafError> {
        Ok(Self {
            transcription: build_transcription_table(group.transcription, time_slots)?,
            confidence: build_reference_table(group.confidence)?,
            is_translation: normalize_flags(build_reference_table(group.is_translation)?),
            manually_corrected: normalize_flags(build_reference_table(group.manually_corrected)?),
        })
    }

    /// Checks the cross-table invariants of a bundle.
    ///
    /// Every dependent row must point at a transcription row of the same
    /// language, and all four tables must have the same number of rows.
    pub fn validate(&self, language: &LanguageCode) -> Result<(), EafError> {
        let transcription_ids: HashSet<&str> = self
            .transcription
            .iter()
            .map(|row| row.annotation_id.as_str())
            .collect();

        let dependent_refs = self
            .confidence
            .iter()
            .map(|row| (&row.annotation_id, &row.annotation_ref))
            .chain(
                self.is_translation
                    .iter()
                    .chain(&self.manually_corrected)
                    .map(|row| (&row.annotation_id, &row.annotation_ref)),
            );

        for (annotation_id, annotation_ref) in dependent_refs {
            if !transcription_ids.contains(annotation_ref.as_str()) {
                return Err(EafError::UnresolvedAnnotationReference {
                    language: language.to_string(),
                    annotation_id: annotation_id.to_string(),
                    annotation_ref: annotation_ref.to_string(),
                });
            }
        }

        let counts = [
            self.transcription.len(),
            self.confidence.len(),
            self.is_translation.len(),
            self.manually_corrected.len(),
        ];
        if counts.iter().any(|&count| count != counts[0]) {
            return Err(EafError::RowCountMismatch {
                language: language.to_string(),
                transcription: counts[0],
                confidence: counts[1],
                is_translation: counts[2],
                manually_corrected: counts[3],
            });
        }

        Ok(())
    }

    /// Number of rows in each table (they are equal once validated).
    pub fn row_count(&self) -> usize {
        self.transcription.len()
    }

    /// IDs of every row across the four tables.
    pub fn annotation_ids(&self) -> impl Iterator<Item = &AnnotationId> {
        self.transcription
            .iter()
            .map(|row| &row.annotation_id)
            .chain(self.confidence.iter().map(|row| &row.annotation_id))
            .chain(self.is_translation.iter().map(|row| &row.annotation_id))
            .chain(self.manually_corrected.iter().map(|row| &row.annotation_id))
    }
}

/// Everything known about one language of a document.
///
/// Bundles are only created by document construction and never change
/// afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LanguageBundle {
    language: LanguageCode,
    tables: BundleTables,
    /// `None` when the is-translation table is empty.
    translation_percentage: Option<f64>,
    speech_duration_ms: u64,
    is_original: bool,
    speaker_name: Option<String>,
    speaker_native: Option<bool>,
}

impl LanguageBundle {
    /// Builds, validates and measures the bundle for one tier group.
    pub(crate) fn assemble(
        group: &TierGroup<'_>,
        time_slots: &TimeSlotTable,
        resolver: &dyn MetadataResolver,
    ) -> Result<Self, EafError> {
        let language = group.language.clone();
        let tables = BundleTables::from_group(group, time_slots)?;
        tables.validate(&language)?;

        let translation_percentage = metrics::translation_percentage(&tables.is_translation);
        let speech_duration_ms = metrics::speech_duration_ms(&language, &tables.transcription)?;
        let speaker_name = resolver.speaker_name(&language, &tables);
        let speaker_native = resolver.speaker_native(&language, &tables);

        log::debug!(
            "language '{}': {} row(s), {} ms of speech",
            language,
            tables.row_count(),
            speech_duration_ms
        );

        Ok(Self {
            language,
            tables,
            translation_percentage,
            speech_duration_ms,
            is_original: false,
            speaker_name,
            speaker_native,
        })
    }

    pub(crate) fn mark_original(&mut self) {
        self.is_original = true;
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn tables(&self) -> &BundleTables {
        &self.tables
    }

    pub fn transcription(&self) -> &[TranscriptionRow] {
        &self.tables.transcription
    }

    pub fn confidence(&self) -> &[ReferenceRow] {
        &self.tables.confidence
    }

    pub fn is_translation(&self) -> &[FlagRow] {
        &self.tables.is_translation
    }

    pub fn manually_corrected(&self) -> &[FlagRow] {
        &self.tables.manually_corrected
    }

    pub fn translation_percentage(&self) -> Option<f64> {
        self.translation_percentage
    }

    pub fn speech_duration_ms(&self) -> u64 {
        self.speech_duration_ms
    }

    pub fn is_original(&self) -> bool {
        self.is_original
    }

    /// `None` means no resolver could name the speaker.
    pub fn speaker_name(&self) -> Option<&str> {
        self.speaker_name.as_deref()
    }

    /// `None` means nativeness is not available.
    pub fn speaker_native(&self) -> Option<bool> {
        self.speaker_native
    }
}
