#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// One time-aligned segment of a language, with its three dependent values.
#[derive(Clone, Debug)]
pub struct Segment {
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
    pub confidence: String,
    pub is_translation: String,
    pub manually_corrected: String,
}

pub fn segment(start_ms: u64, end_ms: u64, is_translation: &str) -> Segment {
    Segment {
        start_ms,
        end_ms,
        text: format!("words {start_ms}-{end_ms}"),
        confidence: "0.87".to_string(),
        is_translation: is_translation.to_string(),
        manually_corrected: "False".to_string(),
    }
}

/// Renders a complete EAF document with four tiers per language.
///
/// Time slots are `ts1, ts2, ...` and annotation IDs `a1, a2, ...`, both
/// numbered across the whole document. Transcription annotation IDs follow
/// the pattern `a{n}` where `n` counts segments from 1 in document order.
pub fn build_eaf(languages: &[(&str, Vec<Segment>)]) -> String {
    let segment_count: usize = languages.iter().map(|(_, segs)| segs.len()).sum();

    let mut slots = Vec::new();
    let mut body = String::new();
    let mut next_ann = segment_count + 1;
    let mut seg_no = 0;

    for (code, segments) in languages {
        let mut transcription = Vec::new();
        let mut confidence = Vec::new();
        let mut is_translation = Vec::new();
        let mut manually_corrected = Vec::new();

        for seg in segments {
            seg_no += 1;
            let ts1 = format!("ts{}", slots.len() + 1);
            slots.push((ts1.clone(), seg.start_ms));
            let ts2 = format!("ts{}", slots.len() + 1);
            slots.push((ts2.clone(), seg.end_ms));

            let id = format!("a{seg_no}");
            transcription.push(alignable(&id, &ts1, &ts2, &seg.text));
            for (rows, value) in [
                (&mut confidence, &seg.confidence),
                (&mut is_translation, &seg.is_translation),
                (&mut manually_corrected, &seg.manually_corrected),
            ] {
                rows.push(reference(&format!("a{next_ann}"), &id, value));
                next_ann += 1;
            }
        }

        body.push_str(&tier(&format!("transcription-{code}"), "default-lt", &transcription));
        body.push_str(&tier(&format!("confidence-{code}"), "confidence-lt", &confidence));
        body.push_str(&tier(&format!("is-translation-{code}"), "boolean-lt", &is_translation));
        body.push_str(&tier(
            &format!("manually-corrected-{code}"),
            "boolean-lt",
            &manually_corrected,
        ));
    }

    document(&slots, &body)
}

pub fn document(slots: &[(String, u64)], body: &str) -> String {
    let mut xml = String::new();
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        xml,
        r#"<ANNOTATION_DOCUMENT AUTHOR="" DATE="2019-03-11T09:00:00+01:00" FORMAT="3.0" VERSION="3.0">"#
    )
    .unwrap();
    writeln!(xml, r#"  <HEADER MEDIA_FILE="" TIME_UNITS="milliseconds">"#).unwrap();
    writeln!(xml, r#"    <PROPERTY NAME="URN">urn:nl-mpi-tools-elan-eaf:test</PROPERTY>"#).unwrap();
    writeln!(xml, "  </HEADER>").unwrap();
    writeln!(xml, "  <TIME_ORDER>").unwrap();
    for (id, value) in slots {
        writeln!(xml, r#"    <TIME_SLOT TIME_SLOT_ID="{id}" TIME_VALUE="{value}"/>"#).unwrap();
    }
    writeln!(xml, "  </TIME_ORDER>").unwrap();
    xml.push_str(body);
    writeln!(xml, "</ANNOTATION_DOCUMENT>").unwrap();
    xml
}

pub fn tier(tier_id: &str, linguistic_type: &str, annotations: &[String]) -> String {
    let mut xml = format!(
        "  <TIER LINGUISTIC_TYPE_REF=\"{linguistic_type}\" TIER_ID=\"{tier_id}\">\n"
    );
    for annotation in annotations {
        xml.push_str(annotation);
    }
    xml.push_str("  </TIER>\n");
    xml
}

pub fn alignable(id: &str, ts1: &str, ts2: &str, value: &str) -> String {
    format!(
        "    <ANNOTATION>\n      <ALIGNABLE_ANNOTATION ANNOTATION_ID=\"{id}\" TIME_SLOT_REF1=\"{ts1}\" TIME_SLOT_REF2=\"{ts2}\">\n        <ANNOTATION_VALUE>{value}</ANNOTATION_VALUE>\n      </ALIGNABLE_ANNOTATION>\n    </ANNOTATION>\n"
    )
}

pub fn reference(id: &str, annotation_ref: &str, value: &str) -> String {
    format!(
        "    <ANNOTATION>\n      <REF_ANNOTATION ANNOTATION_ID=\"{id}\" ANNOTATION_REF=\"{annotation_ref}\">\n        <ANNOTATION_VALUE>{value}</ANNOTATION_VALUE>\n      </REF_ANNOTATION>\n    </ANNOTATION>\n"
    )
}

pub fn write_eaf(path: &Path, xml: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, xml).expect("write eaf file");
}
