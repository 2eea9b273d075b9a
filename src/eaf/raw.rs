//! Typed schema for the subset of EAF the loader consumes.
//!
//! The XML reader validates required attributes while building these types,
//! so everything downstream works with plain fields instead of attribute
//! lookups.

use super::ids::{AnnotationId, TimeSlotId};

/// A parsed EAF file, before tiers are grouped by language.
#[derive(Clone, Debug, Default)]
pub struct RawEaf {
    /// `TIME_ORDER/TIME_SLOT` entries in document order.
    pub time_slots: Vec<RawTimeSlot>,
    /// Every `TIER` element in document order.
    pub tiers: Vec<RawTier>,
    /// Opaque markup kept for rebuilding the file later.
    pub decoration: Decoration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTimeSlot {
    pub id: TimeSlotId,
    pub value_ms: u64,
}

#[derive(Clone, Debug)]
pub struct RawTier {
    /// The `TIER_ID` attribute. Its last three characters name the language.
    pub tier_id: String,
    /// The `LINGUISTIC_TYPE_REF` attribute, used to recognise transcription tiers.
    pub linguistic_type_ref: String,
    pub annotations: Vec<RawAnnotation>,
}

/// The single child of an `ANNOTATION` wrapper element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawAnnotation {
    /// `ALIGNABLE_ANNOTATION`: anchored to two time slots.
    Alignable {
        id: AnnotationId,
        time_slot_ref1: TimeSlotId,
        time_slot_ref2: TimeSlotId,
        value: String,
    },
    /// `REF_ANNOTATION`: points at another annotation by ID.
    Reference {
        id: AnnotationId,
        annotation_ref: AnnotationId,
        value: String,
    },
}

impl RawAnnotation {
    pub fn id(&self) -> &AnnotationId {
        match self {
            RawAnnotation::Alignable { id, .. } | RawAnnotation::Reference { id, .. } => id,
        }
    }
}

/// Markup captured verbatim and never interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Decoration {
    /// The `<ANNOTATION_DOCUMENT ...>` start tag as it appears in the source.
    pub annotation_document: String,
    /// The `<PROPERTY NAME="URN">` element as it appears in the source, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urn_property: Option<String>,
}
