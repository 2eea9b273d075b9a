//! Typed rows extracted from a tier's annotations.
//!
//! Rows keep the document order of the annotations inside their tier.
//! Dependent rows are not checked against the transcription table here;
//! that happens once the whole language bundle is assembled.

use serde::Serialize;

use super::ids::AnnotationId;
use super::raw::{RawAnnotation, RawTier};
use super::time_slots::TimeSlotTable;
use crate::error::EafError;

/// A row of the transcription table: a time-aligned text segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranscriptionRow {
    pub annotation_id: AnnotationId,
    pub time_start_ms: u64,
    pub time_end_ms: u64,
    pub text: String,
}

/// A row of a dependent tier with its value kept as text (the confidence table).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    pub annotation_id: AnnotationId,
    pub annotation_ref: AnnotationId,
    pub value: String,
}

/// A row of a dependent tier whose value has been normalized to a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlagRow {
    pub annotation_id: AnnotationId,
    pub annotation_ref: AnnotationId,
    pub value: bool,
}

/// Builds the transcription table, resolving both time slot references.
pub fn build_transcription_table(
    tier: &RawTier,
    time_slots: &TimeSlotTable,
) -> Result<Vec<TranscriptionRow>, EafError> {
    tier.annotations
        .iter()
        .map(|annotation| match annotation {
            RawAnnotation::Alignable {
                id,
                time_slot_ref1,
                time_slot_ref2,
                value,
            } => Ok(TranscriptionRow {
                annotation_id: id.clone(),
                time_start_ms: time_slots.lookup(time_slot_ref1.as_str())?,
                time_end_ms: time_slots.lookup(time_slot_ref2.as_str())?,
                text: value.clone(),
            }),
            RawAnnotation::Reference { id, .. } => Err(EafError::UnexpectedAnnotationKind {
                tier_id: tier.tier_id.clone(),
                annotation_id: id.to_string(),
                expected: "ALIGNABLE_ANNOTATION",
            }),
        })
        .collect()
}

/// Builds a dependent table (confidence, is-translation or manually-corrected).
pub fn build_reference_table(tier: &RawTier) -> Result<Vec<ReferenceRow>, EafError> {
    tier.annotations
        .iter()
        .map(|annotation| match annotation {
            RawAnnotation::Reference {
                id,
                annotation_ref,
                value,
            } => Ok(ReferenceRow {
                annotation_id: id.clone(),
                annotation_ref: annotation_ref.clone(),
                value: value.clone(),
            }),
            RawAnnotation::Alignable { id, .. } => Err(EafError::UnexpectedAnnotationKind {
                tier_id: tier.tier_id.clone(),
                annotation_id: id.to_string(),
                expected: "REF_ANNOTATION",
            }),
        })
        .collect()
}

/// Maps the exact text `"True"` to `true` and anything else to `false`.
///
/// Matching is case-sensitive: `"true"`, `"TRUE"` and `" True"` are all false.
pub fn normalize_flag(text: &str) -> bool {
    text == "True"
}

/// Converts a text-valued dependent table into a boolean one.
pub fn normalize_flags(rows: Vec<ReferenceRow>) -> Vec<FlagRow> {
    rows.into_iter()
        .map(|row| FlagRow {
            value: normalize_flag(&row.value),
            annotation_id: row.annotation_id,
            annotation_ref: row.annotation_ref,
        })
        .collect()
}
