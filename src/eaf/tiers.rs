//! Grouping of a document's tiers into per-language bundles.
//!
//! Each language is encoded as four consecutive tiers: a transcription tier
//! followed by its confidence, is-translation and manually-corrected tiers.
//! Only the transcription tier is recognisable on its own (by linguistic
//! type); the other three are identified purely by position.

use std::collections::HashSet;

use serde::Serialize;

use super::ids::LanguageCode;
use super::raw::RawTier;
use crate::error::EafError;

/// Linguistic type that marks a transcription tier unless configured otherwise.
pub const DEFAULT_TRANSCRIPTION_TYPE: &str = "default-lt";

/// Number of tiers that make up one language group.
pub const TIERS_PER_LANGUAGE: usize = 4;

/// Options for tier classification.
#[derive(Clone, Debug)]
pub struct ClassifyOptions {
    /// `LINGUISTIC_TYPE_REF` value that identifies a transcription tier.
    pub transcription_type: String,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            transcription_type: DEFAULT_TRANSCRIPTION_TYPE.to_string(),
        }
    }
}

/// Role of a tier within its language group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierRole {
    Transcription,
    Confidence,
    IsTranslation,
    ManuallyCorrected,
}

impl TierRole {
    /// Roles in the order they appear within a group.
    pub const GROUP_ORDER: [TierRole; TIERS_PER_LANGUAGE] = [
        TierRole::Transcription,
        TierRole::Confidence,
        TierRole::IsTranslation,
        TierRole::ManuallyCorrected,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TierRole::Transcription => "transcription",
            TierRole::Confidence => "confidence",
            TierRole::IsTranslation => "is_translation",
            TierRole::ManuallyCorrected => "manually_corrected",
        }
    }
}

/// The four tiers of one language, borrowed from the parsed document.
#[derive(Clone, Debug)]
pub struct TierGroup<'a> {
    pub language: LanguageCode,
    pub transcription: &'a RawTier,
    pub confidence: &'a RawTier,
    pub is_translation: &'a RawTier,
    pub manually_corrected: &'a RawTier,
}

/// Partitions `tiers` into language groups, in discovery order.
///
/// Tiers that precede or sit between groups are ignored. Only structure is
/// checked here; annotation contents are left to the table builders.
pub fn classify_tiers<'a>(
    tiers: &'a [RawTier],
    opts: &ClassifyOptions,
) -> Result<Vec<TierGroup<'a>>, EafError> {
    let is_transcription = |tier: &RawTier| tier.linguistic_type_ref == opts.transcription_type;

    let mut groups = Vec::new();
    let mut seen_languages = HashSet::new();
    let mut idx = 0;

    while idx < tiers.len() {
        let head = &tiers[idx];
        if !is_transcription(head) {
            log::debug!("tier '{}' is not part of any language group", head.tier_id);
            idx += 1;
            continue;
        }

        let members = &tiers[idx..(idx + TIERS_PER_LANGUAGE).min(tiers.len())];
        if members.len() != TIERS_PER_LANGUAGE {
            return Err(EafError::MalformedTierGroup {
                tier_id: head.tier_id.clone(),
                message: format!(
                    "expected {} dependent tiers after transcription tier, found {}",
                    TIERS_PER_LANGUAGE - 1,
                    members.len() - 1
                ),
            });
        }

        for (member, role) in members.iter().zip(TierRole::GROUP_ORDER).skip(1) {
            if is_transcription(member) {
                return Err(EafError::MalformedTierGroup {
                    tier_id: head.tier_id.clone(),
                    message: format!(
                        "tier '{}' is in the {} position but is itself a transcription tier",
                        member.tier_id,
                        role.name()
                    ),
                });
            }
        }

        let language = language_code(&head.tier_id)?;
        if !seen_languages.insert(language.clone()) {
            return Err(EafError::MalformedTierGroup {
                tier_id: head.tier_id.clone(),
                message: format!("language '{language}' already has a tier group"),
            });
        }

        groups.push(TierGroup {
            language,
            transcription: &members[0],
            confidence: &members[1],
            is_translation: &members[2],
            manually_corrected: &members[3],
        });
        idx += TIERS_PER_LANGUAGE;
    }

    log::debug!("classified {} language group(s)", groups.len());
    Ok(groups)
}

/// Last three characters of a transcription tier's ID.
fn language_code(tier_id: &str) -> Result<LanguageCode, EafError> {
    let start = tier_id
        .char_indices()
        .rev()
        .nth(2)
        .map(|(pos, _)| pos)
        .ok_or_else(|| EafError::MalformedTierGroup {
            tier_id: tier_id.to_string(),
            message: "tier ID is too short to carry a 3-character language code".to_string(),
        })?;
    Ok(LanguageCode::new(&tier_id[start..]))
}

/// Fuzz-only entrypoint for language code extraction.
#[cfg(feature = "fuzzing")]
pub fn fuzz_language_code(tier_id: &str) -> Result<(), EafError> {
    let _ = language_code(tier_id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: &str, linguistic_type: &str) -> RawTier {
        RawTier {
            tier_id: id.to_string(),
            linguistic_type_ref: linguistic_type.to_string(),
            annotations: vec![],
        }
    }

    fn language_tiers(code: &str) -> Vec<RawTier> {
        vec![
            tier(&format!("transcription-{code}"), DEFAULT_TRANSCRIPTION_TYPE),
            tier(&format!("confidence-{code}"), "confidence-lt"),
            tier(&format!("is-translation-{code}"), "bool-lt"),
            tier(&format!("manually-corrected-{code}"), "bool-lt"),
        ]
    }

    #[test]
    fn groups_follow_discovery_order() {
        let mut tiers = language_tiers("fra");
        tiers.extend(language_tiers("eng"));

        let groups = classify_tiers(&tiers, &ClassifyOptions::default()).unwrap();
        let codes: Vec<_> = groups.iter().map(|g| g.language.as_str()).collect();
        assert_eq!(codes, ["fra", "eng"]);
        assert_eq!(groups[1].is_translation.tier_id, "is-translation-eng");
    }

    #[test]
    fn leading_unrelated_tiers_are_skipped() {
        let mut tiers = vec![tier("notes", "free-text")];
        tiers.extend(language_tiers("deu"));

        let groups = classify_tiers(&tiers, &ClassifyOptions::default()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].language.as_str(), "deu");
    }

    #[test]
    fn short_group_is_rejected() {
        let mut tiers = language_tiers("eng");
        tiers.pop();

        match classify_tiers(&tiers, &ClassifyOptions::default()).unwrap_err() {
            EafError::MalformedTierGroup { tier_id, message } => {
                assert_eq!(tier_id, "transcription-eng");
                assert!(message.contains("found 2"));
            }
            other => panic!("expected MalformedTierGroup, got {other:?}"),
        }
    }

    #[test]
    fn transcription_inside_group_is_rejected() {
        let mut tiers = language_tiers("eng");
        tiers.truncate(2);
        tiers.extend(language_tiers("fra"));

        let err = classify_tiers(&tiers, &ClassifyOptions::default()).unwrap_err();
        assert!(matches!(err, EafError::MalformedTierGroup { .. }));
    }

    #[test]
    fn repeated_language_is_rejected() {
        let mut tiers = language_tiers("eng");
        tiers.extend(language_tiers("eng"));

        let err = classify_tiers(&tiers, &ClassifyOptions::default()).unwrap_err();
        assert!(matches!(err, EafError::MalformedTierGroup { .. }));
    }

    #[test]
    fn custom_transcription_type_is_honoured() {
        let tiers = vec![
            tier("tx_spa", "words"),
            tier("a", "x"),
            tier("b", "x"),
            tier("c", "x"),
        ];
        let opts = ClassifyOptions {
            transcription_type: "words".to_string(),
        };
        let groups = classify_tiers(&tiers, &opts).unwrap();
        assert_eq!(groups[0].language.as_str(), "spa");
    }

    #[test]
    fn language_code_uses_characters_not_bytes() {
        assert_eq!(language_code("tier-ñèü").unwrap().as_str(), "ñèü");
        assert!(language_code("ab").is_err());
    }
}
