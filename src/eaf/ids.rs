//! Newtype IDs for the identifiers an EAF file links together.
//!
//! EAF cross-references everything by string ID (annotations point at time
//! slots, dependent annotations point at root annotations). Newtypes keep a
//! time slot ID from being looked up where an annotation ID is expected.

use serde::Serialize;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:?})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// The `TIME_SLOT_ID` of an entry in the `TIME_ORDER` block.
    TimeSlotId
);

string_id!(
    /// The `ANNOTATION_ID` of an alignable or reference annotation.
    AnnotationId
);

string_id!(
    /// Three-character language code taken from the end of a transcription tier's ID.
    LanguageCode
);
