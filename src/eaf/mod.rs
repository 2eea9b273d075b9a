//! Document model for ELAN annotation (EAF) files.
//!
//! An EAF file stores time-aligned transcriptions as tiers of annotations
//! that refer to each other by ID. This module resolves those references and
//! exposes the result as a validated, per-language relational model.
//!
//! # Pipeline
//!
//! 1. [`io_eaf_xml`] parses the XML once into a typed [`RawEaf`].
//! 2. [`TimeSlotTable`] resolves time slot IDs to milliseconds.
//! 3. [`classify_tiers`] groups tiers into four-tier language groups.
//! 4. Each group becomes a [`LanguageBundle`]: four typed tables, checked
//!    for dangling references and equal row counts, plus derived metrics.
//! 5. The least-translated language is marked original and everything is
//!    frozen into a [`Document`].
//!
//! # Example
//!
//! ```
//! use eafkit::eaf::io_eaf_xml::from_eaf_str;
//!
//! let xml = r#"<ANNOTATION_DOCUMENT>
//!   <TIME_ORDER>
//!     <TIME_SLOT TIME_SLOT_ID="ts1" TIME_VALUE="0"/>
//!     <TIME_SLOT TIME_SLOT_ID="ts2" TIME_VALUE="1000"/>
//!   </TIME_ORDER>
//! </ANNOTATION_DOCUMENT>"#;
//!
//! let doc = from_eaf_str(xml).unwrap();
//! assert_eq!(doc.duration_ms(), 1000);
//! assert!(doc.original_language().is_none());
//! ```

mod bundle;
mod document;
mod ids;
pub mod io_csv;
pub mod io_eaf_xml;
pub mod io_json;
mod join;
mod metrics;
mod raw;
mod resolver;
mod tables;
mod tiers;
mod time_slots;

// Re-export core types for convenient access
pub use bundle::{BundleTables, LanguageBundle};
pub use document::{document_name, Document};
pub use ids::{AnnotationId, LanguageCode, TimeSlotId};
pub use join::{join_bundle, JoinedRow};
pub use metrics::{select_original, speech_duration_ms, translation_percentage};
pub use raw::{Decoration, RawAnnotation, RawEaf, RawTier, RawTimeSlot};
pub use resolver::{MetadataResolver, NoMetadata};
pub use tables::{
    build_reference_table, build_transcription_table, normalize_flag, normalize_flags, FlagRow,
    ReferenceRow, TranscriptionRow,
};
pub use tiers::{
    classify_tiers, ClassifyOptions, TierGroup, TierRole, DEFAULT_TRANSCRIPTION_TYPE,
    TIERS_PER_LANGUAGE,
};
pub use time_slots::TimeSlotTable;

#[cfg(feature = "fuzzing")]
pub use tiers::fuzz_language_code;
