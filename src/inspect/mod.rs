//! Document inspection.
//!
//! Summarizes a built [`Document`] per language: row counts, translated
//! and manually corrected rows, translation share and speech time.

mod report;

pub use report::{InspectReport, LanguageSection, SummarySection};

use crate::eaf::{Document, LanguageBundle};

/// Inspect a document and produce a report.
pub fn inspect_document(document: &Document) -> InspectReport {
    let languages: Vec<LanguageSection> = document.languages().iter().map(language_section).collect();

    let annotations = document
        .languages()
        .iter()
        .map(|bundle| bundle.tables().annotation_ids().count())
        .sum();

    InspectReport {
        summary: SummarySection {
            file_name: document.file_name().to_string(),
            duration_ms: document.duration_ms(),
            time_slots: document.time_slots().len(),
            languages: languages.len(),
            annotations,
            original_language: document.original_language().map(ToString::to_string),
        },
        languages,
    }
}

fn language_section(bundle: &LanguageBundle) -> LanguageSection {
    LanguageSection {
        language: bundle.language().to_string(),
        rows: bundle.tables().row_count(),
        translated_rows: bundle.is_translation().iter().filter(|r| r.value).count(),
        manually_corrected_rows: bundle.manually_corrected().iter().filter(|r| r.value).count(),
        translation_percentage: bundle.translation_percentage(),
        speech_duration_ms: bundle.speech_duration_ms(),
        is_original: bundle.is_original(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eaf::io_eaf_xml::from_eaf_str;

    fn make_test_document() -> Document {
        let mut xml = String::from(
            r#"<ANNOTATION_DOCUMENT>
  <TIME_ORDER>
    <TIME_SLOT TIME_SLOT_ID="ts1" TIME_VALUE="0"/>
    <TIME_SLOT TIME_SLOT_ID="ts2" TIME_VALUE="2000"/>
    <TIME_SLOT TIME_SLOT_ID="ts3" TIME_VALUE="3000"/>
  </TIME_ORDER>"#,
        );
        for (code, flags) in [("pol", ["True", "True"]), ("por", ["False", "True"])] {
            xml.push_str(&format!(
                r#"
  <TIER LINGUISTIC_TYPE_REF="default-lt" TIER_ID="transcription-{code}">
    <ANNOTATION><ALIGNABLE_ANNOTATION ANNOTATION_ID="{code}1" TIME_SLOT_REF1="ts1" TIME_SLOT_REF2="ts2"><ANNOTATION_VALUE>x</ANNOTATION_VALUE></ALIGNABLE_ANNOTATION></ANNOTATION>
    <ANNOTATION><ALIGNABLE_ANNOTATION ANNOTATION_ID="{code}2" TIME_SLOT_REF1="ts2" TIME_SLOT_REF2="ts3"><ANNOTATION_VALUE>y</ANNOTATION_VALUE></ALIGNABLE_ANNOTATION></ANNOTATION>
  </TIER>"#
            ));
            for (kind, values) in [
                ("confidence", ["0.9", "0.8"]),
                ("is-translation", flags),
                ("manually-corrected", ["False", "True"]),
            ] {
                xml.push_str(&format!(
                    r#"
  <TIER LINGUISTIC_TYPE_REF="{kind}-lt" TIER_ID="{kind}-{code}">
    <ANNOTATION><REF_ANNOTATION ANNOTATION_ID="{code}-{kind}-1" ANNOTATION_REF="{code}1"><ANNOTATION_VALUE>{}</ANNOTATION_VALUE></REF_ANNOTATION></ANNOTATION>
    <ANNOTATION><REF_ANNOTATION ANNOTATION_ID="{code}-{kind}-2" ANNOTATION_REF="{code}2"><ANNOTATION_VALUE>{}</ANNOTATION_VALUE></REF_ANNOTATION></ANNOTATION>
  </TIER>"#,
                    values[0], values[1]
                ));
            }
        }
        xml.push_str("\n</ANNOTATION_DOCUMENT>");
        from_eaf_str(&xml).expect("parse test document")
    }

    #[test]
    fn test_summary_counts() {
        let report = inspect_document(&make_test_document());

        assert_eq!(report.summary.languages, 2);
        assert_eq!(report.summary.time_slots, 3);
        assert_eq!(report.summary.annotations, 16);
        assert_eq!(report.summary.duration_ms, 3000);
        assert_eq!(report.summary.original_language.as_deref(), Some("por"));
    }

    #[test]
    fn test_language_sections() {
        let report = inspect_document(&make_test_document());

        let pol = &report.languages[0];
        assert_eq!(pol.language, "pol");
        assert_eq!(pol.rows, 2);
        assert_eq!(pol.translated_rows, 2);
        assert_eq!(pol.manually_corrected_rows, 1);
        assert_eq!(pol.translation_percentage, Some(1.0));
        assert_eq!(pol.speech_duration_ms, 3000);
        assert!(!pol.is_original);

        let por = &report.languages[1];
        assert_eq!(por.translation_percentage, Some(0.5));
        assert!(por.is_original);
    }

    #[test]
    fn test_display_output() {
        let output = format!("{}", inspect_document(&make_test_document()));

        assert!(output.contains("EAF Document Inspection Report"));
        assert!(output.contains("Summary"));
        assert!(output.contains("Languages (2)"));
        assert!(output.contains("(original)"));
        assert!(output.contains("50.0%"));
    }
}
