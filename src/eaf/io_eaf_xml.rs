//! EAF XML reader.
//!
//! Reads the subset of ELAN Annotation Format the document model needs:
//! - `TIME_ORDER/TIME_SLOT` (`TIME_SLOT_ID`, `TIME_VALUE`)
//! - `TIER` (`TIER_ID`, `LINGUISTIC_TYPE_REF`) with `ANNOTATION` children
//! - `ALIGNABLE_ANNOTATION` and `REF_ANNOTATION`, each with an `ANNOTATION_VALUE`
//! - the root start tag and the `PROPERTY NAME="URN"` element, kept verbatim
//!
//! Everything else in the file is ignored.

use std::fs;
use std::path::Path;

use roxmltree::{Document as XmlDocument, Node};

use super::document::{document_name, Document};
use super::raw::{Decoration, RawAnnotation, RawEaf, RawTier, RawTimeSlot};
use super::resolver::{MetadataResolver, NoMetadata};
use super::tiers::ClassifyOptions;
use crate::error::EafError;

const ROOT_TAG: &str = "ANNOTATION_DOCUMENT";

/// Read an EAF file into a [`Document`] with default options.
pub fn read_eaf(path: &Path) -> Result<Document, EafError> {
    read_eaf_with(path, &ClassifyOptions::default(), &NoMetadata)
}

/// Read an EAF file into a [`Document`] with explicit options and resolver.
pub fn read_eaf_with(
    path: &Path,
    opts: &ClassifyOptions,
    resolver: &dyn MetadataResolver,
) -> Result<Document, EafError> {
    let bytes = fs::read(path).map_err(EafError::Io)?;
    let xml = decode_utf8(&bytes, path)?;
    let raw = parse_eaf_str(xml, path)?;
    Document::assemble(&raw, document_name(path), opts, resolver)
}

/// Build a document from an EAF string.
pub fn from_eaf_str(xml: &str) -> Result<Document, EafError> {
    let path = Path::new("<string>");
    let raw = parse_eaf_str(xml, path)?;
    Document::assemble(&raw, "<string>", &ClassifyOptions::default(), &NoMetadata)
}

/// Build a document from EAF bytes (must be valid UTF-8).
pub fn from_eaf_slice(bytes: &[u8]) -> Result<Document, EafError> {
    let path = Path::new("<bytes>");
    let xml = decode_utf8(bytes, path)?;
    let raw = parse_eaf_str(xml, path)?;
    Document::assemble(&raw, "<bytes>", &ClassifyOptions::default(), &NoMetadata)
}

/// Parse EAF XML into the typed intermediate schema.
///
/// `path` is only used for error messages.
pub fn parse_eaf_str(xml: &str, path: &Path) -> Result<RawEaf, EafError> {
    let document = XmlDocument::parse(xml).map_err(|source| EafError::XmlParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;

    let root = document.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(EafError::XmlParse {
            path: path.to_path_buf(),
            message: format!("missing <{ROOT_TAG}> root element"),
        });
    }

    let time_slots = match child_element(root, "TIME_ORDER") {
        Some(time_order) => child_elements(time_order, "TIME_SLOT")
            .map(|node| parse_time_slot(node, path))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let tiers = child_elements(root, "TIER")
        .map(parse_tier)
        .collect::<Result<Vec<_>, _>>()?;

    let decoration = Decoration {
        annotation_document: start_tag(xml, root).to_string(),
        urn_property: root
            .descendants()
            .find(|n| {
                n.is_element() && n.tag_name().name() == "PROPERTY" && n.attribute("NAME") == Some("URN")
            })
            .map(|n| xml[n.range()].to_string()),
    };

    Ok(RawEaf {
        time_slots,
        tiers,
        decoration,
    })
}

fn decode_utf8<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a str, EafError> {
    std::str::from_utf8(bytes).map_err(|source| EafError::XmlParse {
        path: path.to_path_buf(),
        message: format!("input is not valid UTF-8: {source}"),
    })
}

fn parse_time_slot(node: Node<'_, '_>, path: &Path) -> Result<RawTimeSlot, EafError> {
    let id = required_attr(node, "TIME_SLOT", "TIME_SLOT_ID")?;
    let raw = required_attr(node, "TIME_SLOT", "TIME_VALUE")?;
    let value_ms = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| EafError::XmlParse {
            path: path.to_path_buf(),
            message: format!(
                "invalid TIME_VALUE '{raw}' for time slot '{id}'; expected non-negative integer milliseconds"
            ),
        })?;

    Ok(RawTimeSlot {
        id: id.into(),
        value_ms,
    })
}

fn parse_tier(node: Node<'_, '_>) -> Result<RawTier, EafError> {
    let tier_id = required_attr(node, "TIER", "TIER_ID")?.to_string();
    let linguistic_type_ref = required_attr(node, "TIER", "LINGUISTIC_TYPE_REF")?.to_string();

    let annotations = child_elements(node, "ANNOTATION")
        .map(parse_annotation)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawTier {
        tier_id,
        linguistic_type_ref,
        annotations,
    })
}

fn parse_annotation(node: Node<'_, '_>) -> Result<RawAnnotation, EafError> {
    if let Some(inner) = child_element(node, "ALIGNABLE_ANNOTATION") {
        const TAG: &str = "ALIGNABLE_ANNOTATION";
        return Ok(RawAnnotation::Alignable {
            id: required_attr(inner, TAG, "ANNOTATION_ID")?.into(),
            time_slot_ref1: required_attr(inner, TAG, "TIME_SLOT_REF1")?.into(),
            time_slot_ref2: required_attr(inner, TAG, "TIME_SLOT_REF2")?.into(),
            value: annotation_value(inner, TAG)?,
        });
    }

    if let Some(inner) = child_element(node, "REF_ANNOTATION") {
        const TAG: &str = "REF_ANNOTATION";
        return Ok(RawAnnotation::Reference {
            id: required_attr(inner, TAG, "ANNOTATION_ID")?.into(),
            annotation_ref: required_attr(inner, TAG, "ANNOTATION_REF")?.into(),
            value: annotation_value(inner, TAG)?,
        });
    }

    Err(EafError::MissingElement {
        parent: "ANNOTATION",
        element: "ALIGNABLE_ANNOTATION or REF_ANNOTATION",
    })
}

/// Text of the `ANNOTATION_VALUE` child. An empty element yields `""`.
fn annotation_value(node: Node<'_, '_>, context: &'static str) -> Result<String, EafError> {
    child_element(node, "ANNOTATION_VALUE")
        .map(|value| value.text().unwrap_or("").to_string())
        .ok_or(EafError::MissingElement {
            parent: context,
            element: "ANNOTATION_VALUE",
        })
}

/// The element's start tag exactly as written in the source.
fn start_tag<'a>(xml: &'a str, node: Node<'_, '_>) -> &'a str {
    let range = node.range();
    let tag = &xml[range.clone()];
    let mut quote = None;
    for (offset, ch) in tag.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return &tag[..=offset],
            _ => {}
        }
    }
    tag
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

fn required_attr<'a>(
    node: Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, EafError> {
    node.attribute(attribute)
        .ok_or(EafError::MissingAttribute { element, attribute })
}
