//! Composition aggregate — the ordered list of party records being edited

use super::chamber::{ChamberGroup, check_chamber_totals, group_by_chamber};
use super::color::SeatColor;
use super::layout::ChamberLayout;
use super::party::{PartyEdit, PartyRecord};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Seat composition of a country's legislature (Aggregate Root)
///
/// Records are addressed by index. Chambers and layouts are derived on
/// demand from the current records and never cached here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub country: Option<String>,
    #[serde(default)]
    records: Vec<PartyRecord>,
}

impl Composition {
    /// Composition from records already known to fit, such as a validated config
    pub fn new(country: Option<String>, records: Vec<PartyRecord>) -> Self {
        Self { country, records }
    }

    /// Composition from untrusted records; rejects oversized chambers.
    pub fn try_new(
        country: Option<String>,
        records: Vec<PartyRecord>,
    ) -> Result<Self, DomainError> {
        check_chamber_totals(&records)?;
        Ok(Self::new(country, records))
    }

    /// The 119th United States Congress, used when nothing is configured
    pub fn united_states() -> Self {
        const HOUSE: &str = "House of Representatives";
        const SENATE: &str = "Senate";

        Self::new(
            Some("United States".to_string()),
            vec![
                PartyRecord::new(HOUSE, "Republicans", 218, SeatColor::RED),
                PartyRecord::new(HOUSE, "Democrats", 214, SeatColor::BLUE),
                PartyRecord::new(HOUSE, "Vacant", 3, SeatColor::WHITE),
                PartyRecord::new(SENATE, "Republicans", 53, SeatColor::RED),
                PartyRecord::new(SENATE, "Democrats", 47, SeatColor::BLUE),
            ],
        )
    }

    pub fn records(&self) -> &[PartyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PartyRecord> {
        self.records.get(index)
    }

    /// Append a blank record and return its index
    pub fn add_blank(&mut self) -> usize {
        self.records.push(PartyRecord::blank());
        self.records.len() - 1
    }

    /// Append a record and return its index
    pub fn push(&mut self, record: PartyRecord) -> Result<usize, DomainError> {
        self.records.push(record);
        if let Err(e) = check_chamber_totals(&self.records) {
            self.records.pop();
            return Err(e);
        }
        Ok(self.records.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<PartyRecord, DomainError> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Apply a single-field edit to the record at `index`.
    ///
    /// The record is left unchanged when the edit is rejected.
    pub fn apply(&mut self, index: usize, edit: PartyEdit) -> Result<(), DomainError> {
        self.check_index(index)?;
        let mut updated = self.records[index].clone();
        edit.apply_to(&mut updated)?;

        let previous = std::mem::replace(&mut self.records[index], updated);
        if let Err(e) = check_chamber_totals(&self.records) {
            self.records[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
    }

    /// Records grouped by chamber, in first-appearance order
    pub fn chambers(&self) -> Vec<ChamberGroup> {
        group_by_chamber(&self.records)
    }

    /// One layout per chamber
    pub fn layouts(&self) -> Vec<ChamberLayout> {
        self.chambers().iter().map(ChamberLayout::build).collect()
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.records.len() {
            return Err(DomainError::RecordOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}
