//! Chamber grouping — first step of the layout pipeline

use super::grid::majority_threshold;
use super::party::PartyRecord;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Upper bound on the seats of one chamber
pub const MAX_CHAMBER_SEATS: u32 = 1_000_000;

/// All party records of one chamber, with derived totals
///
/// Derived from the record list and never stored. Totals above
/// [`MAX_CHAMBER_SEATS`] are rejected by [`check_chamber_totals`] before
/// records reach a composition, so `total_members` always fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberGroup {
    pub chamber: String,
    pub parties: Vec<PartyRecord>,
    pub total_members: u32,
    pub majority_threshold: u32,
}

impl ChamberGroup {
    pub fn new(chamber: impl Into<String>, parties: Vec<PartyRecord>) -> Self {
        let total = sum_members(&parties);
        let total_members = u32::try_from(total).unwrap_or(u32::MAX);
        Self {
            chamber: chamber.into(),
            parties,
            total_members,
            majority_threshold: majority_threshold(total_members),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_members == 0
    }
}

fn sum_members(parties: &[PartyRecord]) -> u64 {
    parties.iter().map(|p| u64::from(p.members)).sum()
}

/// Seat total of every chamber, in first-appearance order
pub fn chamber_totals(records: &[PartyRecord]) -> Vec<(&str, u64)> {
    let mut totals: Vec<(&str, u64)> = Vec::new();
    for record in records {
        let members = u64::from(record.members);
        match totals.iter_mut().find(|(name, _)| *name == record.chamber) {
            Some((_, total)) => *total += members,
            None => totals.push((record.chamber.as_str(), members)),
        }
    }
    totals
}

/// Reject records whose chambers exceed [`MAX_CHAMBER_SEATS`].
pub fn check_chamber_totals(records: &[PartyRecord]) -> Result<(), DomainError> {
    match chamber_totals(records)
        .into_iter()
        .find(|&(_, total)| total > u64::from(MAX_CHAMBER_SEATS))
    {
        Some((chamber, total)) => Err(DomainError::TooManySeats {
            chamber: chamber.to_string(),
            total,
        }),
        None => Ok(()),
    }
}

/// Group records by chamber.
///
/// Chambers appear in order of their first record; parties keep their
/// record order inside a chamber.
pub fn group_by_chamber(records: &[PartyRecord]) -> Vec<ChamberGroup> {
    let mut chambers: Vec<(&str, Vec<PartyRecord>)> = Vec::new();

    for record in records {
        match chambers
            .iter_mut()
            .find(|(name, _)| *name == record.chamber.as_str())
        {
            Some((_, parties)) => parties.push(record.clone()),
            None => chambers.push((record.chamber.as_str(), vec![record.clone()])),
        }
    }

    chambers
        .into_iter()
        .map(|(name, parties)| ChamberGroup::new(name, parties))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::color::SeatColor;

    fn record(chamber: &str, party: &str, members: u32) -> PartyRecord {
        PartyRecord::new(chamber, party, members, SeatColor::WHITE)
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let records = vec![
            record("Senate", "A", 1),
            record("House", "B", 2),
            record("Senate", "C", 3),
        ];
        let groups = group_by_chamber(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].chamber, "Senate");
        assert_eq!(groups[1].chamber, "House");

        let senate: Vec<_> = groups[0].parties.iter().map(|p| p.party.as_str()).collect();
        assert_eq!(senate, vec!["A", "C"]);
    }

    #[test]
    fn test_totals_and_threshold() {
        let records = vec![record("X", "A", 3), record("X", "B", 2)];
        let groups = group_by_chamber(&records);
        assert_eq!(groups[0].total_members, 5);
        assert_eq!(groups[0].majority_threshold, 2);
    }

    #[test]
    fn test_empty_records() {
        assert!(group_by_chamber(&[]).is_empty());
    }

    #[test]
    fn test_zero_member_chamber_is_kept() {
        let groups = group_by_chamber(&[record("", "", 0)]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
        assert_eq!(groups[0].majority_threshold, 0);
    }

    #[test]
    fn test_input_is_untouched() {
        let records = vec![record("B", "x", 1), record("A", "y", 1), record("B", "z", 1)];
        let before = records.clone();
        let _ = group_by_chamber(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_chamber_totals_sum_past_u32() {
        let records = vec![record("X", "A", 1_000_000); 4_300];
        assert_eq!(chamber_totals(&records), vec![("X", 4_300_000_000)]);
        assert_eq!(
            check_chamber_totals(&records),
            Err(DomainError::TooManySeats {
                chamber: "X".to_string(),
                total: 4_300_000_000,
            })
        );
    }

    #[test]
    fn test_check_chamber_totals_per_chamber() {
        let records = vec![
            record("A", "x", MAX_CHAMBER_SEATS),
            record("B", "y", MAX_CHAMBER_SEATS),
        ];
        assert!(check_chamber_totals(&records).is_ok());

        let mut over = records.clone();
        over.push(record("B", "z", 1));
        assert!(matches!(
            check_chamber_totals(&over),
            Err(DomainError::TooManySeats { chamber, total: 1_000_001 }) if chamber == "B"
        ));
    }
}
