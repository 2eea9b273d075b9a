//! Resolution of `TIME_SLOT_ID` references to millisecond offsets.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

use super::ids::TimeSlotId;
use super::raw::RawTimeSlot;
use crate::error::EafError;

/// Maps every time slot ID of a document to its value in milliseconds.
///
/// Built once from the `TIME_ORDER` block and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeSlotTable {
    slots: BTreeMap<TimeSlotId, u64>,
}

impl TimeSlotTable {
    /// Builds the table from slots in document order.
    ///
    /// A slot ID that appears twice with the same value is accepted; with a
    /// different value it fails with [`EafError::DuplicateTimeSlot`].
    pub fn from_slots<'a, I>(slots: I) -> Result<Self, EafError>
    where
        I: IntoIterator<Item = &'a RawTimeSlot>,
    {
        let mut table = BTreeMap::new();

        for slot in slots {
            match table.entry(slot.id.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(slot.value_ms);
                }
                Entry::Occupied(entry) => {
                    let first = *entry.get();
                    if first != slot.value_ms {
                        return Err(EafError::DuplicateTimeSlot {
                            id: slot.id.to_string(),
                            first,
                            second: slot.value_ms,
                        });
                    }
                }
            }
        }

        Ok(Self { slots: table })
    }

    /// Returns the millisecond value recorded for `id`.
    pub fn lookup(&self, id: &str) -> Result<u64, EafError> {
        self.slots
            .get(id)
            .copied()
            .ok_or_else(|| EafError::UnresolvedTimeSlot { id: id.to_string() })
    }

    /// Largest time value in the table, or 0 when there are no slots.
    pub fn max_value(&self) -> u64 {
        self.slots.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TimeSlotId, u64)> {
        self.slots.iter().map(|(id, value)| (id, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, value_ms: u64) -> RawTimeSlot {
        RawTimeSlot {
            id: TimeSlotId::new(id),
            value_ms,
        }
    }

    #[test]
    fn lookup_returns_recorded_values() {
        let table = TimeSlotTable::from_slots(&[slot("ts1", 0), slot("ts2", 1500)]).unwrap();
        assert_eq!(table.lookup("ts1").unwrap(), 0);
        assert_eq!(table.lookup("ts2").unwrap(), 1500);
        assert_eq!(table.max_value(), 1500);
    }

    #[test]
    fn lookup_of_absent_id_fails() {
        let table = TimeSlotTable::from_slots(&[slot("ts1", 0)]).unwrap();
        match table.lookup("ts9").unwrap_err() {
            EafError::UnresolvedTimeSlot { id } => assert_eq!(id, "ts9"),
            other => panic!("expected UnresolvedTimeSlot, got {other:?}"),
        }
    }

    #[test]
    fn identical_redefinition_is_tolerated() {
        let table = TimeSlotTable::from_slots(&[slot("ts1", 40), slot("ts1", 40)]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn conflicting_redefinition_fails() {
        let err = TimeSlotTable::from_slots(&[slot("ts1", 40), slot("ts1", 41)]).unwrap_err();
        match err {
            EafError::DuplicateTimeSlot { id, first, second } => {
                assert_eq!(id, "ts1");
                assert_eq!((first, second), (40, 41));
            }
            other => panic!("expected DuplicateTimeSlot, got {other:?}"),
        }
    }

    #[test]
    fn empty_table_has_zero_duration() {
        let table = TimeSlotTable::default();
        assert!(table.is_empty());
        assert_eq!(table.max_value(), 0);
    }
}
