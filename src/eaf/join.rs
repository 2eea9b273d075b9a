//! Denormalized per-language view.
//!
//! The view inner-joins the transcription table with the three dependent
//! tables on `annotation_id = annotation_ref`. A transcription row without a
//! match in any dependent table is absent from the view. The bundle itself
//! keeps every row; only the view is lossy.

use std::collections::HashMap;

use serde::Serialize;

use super::bundle::LanguageBundle;
use super::ids::AnnotationId;

/// One row of the joined view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JoinedRow {
    pub annotation_id: AnnotationId,
    pub time_start_ms: u64,
    pub time_end_ms: u64,
    pub text: String,
    pub confidence_value: String,
    pub is_translation: bool,
    pub manually_corrected: bool,
}

/// Joins the four tables of `bundle`, in transcription row order.
pub fn join_bundle(bundle: &LanguageBundle) -> Vec<JoinedRow> {
    let confidence = index_by_ref(
        bundle
            .confidence()
            .iter()
            .map(|row| (&row.annotation_ref, row.value.as_str())),
    );
    let is_translation = index_by_ref(
        bundle
            .is_translation()
            .iter()
            .map(|row| (&row.annotation_ref, row.value)),
    );
    let manually_corrected = index_by_ref(
        bundle
            .manually_corrected()
            .iter()
            .map(|row| (&row.annotation_ref, row.value)),
    );

    let mut joined = Vec::with_capacity(bundle.transcription().len());
    for row in bundle.transcription() {
        let key = row.annotation_id.as_str();
        let (Some(conf), Some(translated), Some(corrected)) = (
            confidence.get(key),
            is_translation.get(key),
            manually_corrected.get(key),
        ) else {
            continue;
        };

        for &confidence_value in conf {
            for &is_translation in translated {
                for &manually_corrected in corrected {
                    joined.push(JoinedRow {
                        annotation_id: row.annotation_id.clone(),
                        time_start_ms: row.time_start_ms,
                        time_end_ms: row.time_end_ms,
                        text: row.text.clone(),
                        confidence_value: confidence_value.to_string(),
                        is_translation,
                        manually_corrected,
                    });
                }
            }
        }
    }

    joined
}

fn index_by_ref<'a, V, I>(rows: I) -> HashMap<&'a str, Vec<V>>
where
    I: Iterator<Item = (&'a AnnotationId, V)>,
{
    let mut index: HashMap<&str, Vec<V>> = HashMap::new();
    for (annotation_ref, value) in rows {
        index.entry(annotation_ref.as_str()).or_default().push(value);
    }
    index
}
