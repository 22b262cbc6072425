//! Party record entity and member-count parsing

use super::color::SeatColor;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Largest member count accepted for a single party record
pub const MAX_MEMBERS: u32 = 1_000_000;

/// One party's seat count and display color within a chamber
///
/// Records have no identity of their own; they are addressed by position
/// in their [`Composition`](super::composition::Composition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRecord {
    pub chamber: String,
    pub party: String,
    pub members: u32,
    #[serde(default)]
    pub color: SeatColor,
}

impl PartyRecord {
    pub fn new(
        chamber: impl Into<String>,
        party: impl Into<String>,
        members: u32,
        color: SeatColor,
    ) -> Self {
        Self {
            chamber: chamber.into(),
            party: party.into(),
            members,
            color,
        }
    }

    /// Empty row as added from the editor
    pub fn blank() -> Self {
        Self::new("", "", 0, SeatColor::WHITE)
    }
}

/// Single-field change to a [`PartyRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyEdit {
    Chamber(String),
    Party(String),
    Members(u32),
    Color(SeatColor),
}

impl PartyEdit {
    /// Apply the change to `record`, validating the member count.
    pub fn apply_to(self, record: &mut PartyRecord) -> Result<(), DomainError> {
        match self {
            PartyEdit::Chamber(chamber) => record.chamber = chamber,
            PartyEdit::Party(party) => record.party = party,
            PartyEdit::Members(members) => record.members = check_members(members)?,
            PartyEdit::Color(color) => record.color = color,
        }
        Ok(())
    }
}

/// Editable field of a [`PartyRecord`], in editor column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyField {
    Chamber,
    Party,
    Members,
    Color,
}

impl PartyField {
    pub const ALL: [PartyField; 4] = [
        PartyField::Chamber,
        PartyField::Party,
        PartyField::Members,
        PartyField::Color,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PartyField::Chamber => "Chamber",
            PartyField::Party => "Party",
            PartyField::Members => "Members",
            PartyField::Color => "Color",
        }
    }

    /// Parse raw editor text into an edit for this field
    pub fn parse_edit(&self, raw: &str) -> Result<PartyEdit, DomainError> {
        match self {
            PartyField::Chamber => Ok(PartyEdit::Chamber(raw.to_string())),
            PartyField::Party => Ok(PartyEdit::Party(raw.to_string())),
            PartyField::Members => parse_members(raw).map(PartyEdit::Members),
            PartyField::Color => raw.parse().map(PartyEdit::Color),
        }
    }

    /// Current value of this field, formatted for editing
    pub fn value_of(&self, record: &PartyRecord) -> String {
        match self {
            PartyField::Chamber => record.chamber.clone(),
            PartyField::Party => record.party.clone(),
            PartyField::Members => record.members.to_string(),
            PartyField::Color => record.color.to_hex(),
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for PartyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PartyField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chamber" => Ok(PartyField::Chamber),
            "party" => Ok(PartyField::Party),
            "members" => Ok(PartyField::Members),
            "color" | "colour" => Ok(PartyField::Color),
            other => Err(DomainError::InvalidInput(format!("unknown field: {other}"))),
        }
    }
}

/// Parse a member count typed by the user.
///
/// Blank input counts as 0. Negative, fractional and non-numeric input is
/// rejected rather than rounded.
pub fn parse_members(raw: &str) -> Result<u32, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidMembers(format!(
            "expected a non-negative whole number, got {trimmed:?}"
        )));
    }
    let members = trimmed
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidMembers(format!("{trimmed} is too large")))?;
    check_members(members)
}

fn check_members(members: u32) -> Result<u32, DomainError> {
    if members > MAX_MEMBERS {
        return Err(DomainError::InvalidMembers(format!(
            "{members} exceeds the limit of {MAX_MEMBERS}"
        )));
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record() {
        let record = PartyRecord::blank();
        assert!(record.chamber.is_empty());
        assert!(record.party.is_empty());
        assert_eq!(record.members, 0);
        assert_eq!(record.color, SeatColor::WHITE);
    }

    #[test]
    fn test_parse_members() {
        assert_eq!(parse_members("218"), Ok(218));
        assert_eq!(parse_members("  3 "), Ok(3));
        assert_eq!(parse_members(""), Ok(0));
        assert_eq!(parse_members("007"), Ok(7));
    }

    #[test]
    fn test_parse_members_rejects_invalid() {
        for input in ["-1", "2.5", "abc", "1e3", "+4", "99999999999"] {
            assert!(
                matches!(parse_members(input), Err(DomainError::InvalidMembers(_))),
                "accepted {input:?}"
            );
        }
        assert!(parse_members(&(MAX_MEMBERS + 1).to_string()).is_err());
    }

    #[test]
    fn test_apply_edits() {
        let mut record = PartyRecord::blank();
        PartyEdit::Chamber("Senate".into()).apply_to(&mut record).unwrap();
        PartyEdit::Party("Democrats".into()).apply_to(&mut record).unwrap();
        PartyEdit::Members(47).apply_to(&mut record).unwrap();
        PartyEdit::Color(SeatColor::BLUE).apply_to(&mut record).unwrap();
        assert_eq!(
            record,
            PartyRecord::new("Senate", "Democrats", 47, SeatColor::BLUE)
        );
    }

    #[test]
    fn test_apply_rejects_oversized_members() {
        let mut record = PartyRecord::blank();
        let result = PartyEdit::Members(MAX_MEMBERS + 1).apply_to(&mut record);
        assert!(result.is_err());
        assert_eq!(record.members, 0);
    }

    #[test]
    fn test_field_parse_edit() {
        assert_eq!(
            PartyField::Members.parse_edit("12"),
            Ok(PartyEdit::Members(12))
        );
        assert_eq!(
            PartyField::Color.parse_edit("#f00"),
            Ok(PartyEdit::Color(SeatColor::RED))
        );
        assert!(PartyField::Members.parse_edit("x").is_err());
        assert!(PartyField::Color.parse_edit("red").is_err());
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(PartyField::Chamber.next(), PartyField::Party);
        assert_eq!(PartyField::Color.next(), PartyField::Chamber);
        assert_eq!(PartyField::Chamber.prev(), PartyField::Color);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("Members".parse::<PartyField>(), Ok(PartyField::Members));
        assert_eq!("colour".parse::<PartyField>(), Ok(PartyField::Color));
        assert!("seats".parse::<PartyField>().is_err());
    }

    #[test]
    fn test_deserialize_record_without_color() {
        let json = r#"{"chamber":"Senate","party":"Independents","members":2}"#;
        let record: PartyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.color, SeatColor::WHITE);
    }
}
