//! Derived per-language metrics and original-language selection.

use super::ids::LanguageCode;
use super::tables::{FlagRow, TranscriptionRow};
use crate::error::EafError;

/// Share of rows flagged as translated, in `[0, 1]`.
///
/// Returns `None` for an empty table, where the share is undefined.
pub fn translation_percentage(is_translation: &[FlagRow]) -> Option<f64> {
    if is_translation.is_empty() {
        return None;
    }
    let translated = is_translation.iter().filter(|row| row.value).count();
    Some(translated as f64 / is_translation.len() as f64)
}

/// Total length of all transcription segments in milliseconds.
///
/// A segment ending before it starts fails with [`EafError::InvalidInterval`].
pub fn speech_duration_ms(
    language: &LanguageCode,
    transcription: &[TranscriptionRow],
) -> Result<u64, EafError> {
    transcription.iter().try_fold(0u64, |total, row| {
        let length = row
            .time_end_ms
            .checked_sub(row.time_start_ms)
            .ok_or_else(|| EafError::InvalidInterval {
                language: language.to_string(),
                annotation_id: row.annotation_id.to_string(),
                start_ms: row.time_start_ms,
                end_ms: row.time_end_ms,
            })?;
        total
            .checked_add(length)
            .ok_or_else(|| EafError::DurationOverflow {
                language: language.to_string(),
            })
    })
}

/// Index of the least-translated language.
///
/// Undefined percentages rank after every defined one. Ties go to the
/// earliest entry, so the result only depends on discovery order.
pub fn select_original<I>(percentages: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut best: Option<(usize, f64)> = None;

    for (idx, percentage) in percentages.into_iter().enumerate() {
        let rank = percentage.unwrap_or(f64::INFINITY);
        match best {
            Some((_, best_rank)) if rank >= best_rank => {}
            _ => best = Some((idx, rank)),
        }
    }

    best.map(|(idx, _)| idx)
}
