//! Chamber layout — second step of the layout pipeline
//!
//! Walks a [`ChamberGroup`] seat by seat with a single running counter
//! (parties in order, then members within each party) and places every
//! seat on the chamber's [`GridShape`].

use super::chamber::ChamberGroup;
use super::color::SeatColor;
use super::grid::{GridShape, is_majority_index};
use serde::{Deserialize, Serialize};

/// One seat in a chamber grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Flattened index across the whole chamber
    pub index: u32,
    /// Position of the owning party within the chamber group
    pub party_index: usize,
    pub party: String,
    pub color: SeatColor,
    pub row: u32,
    pub col: u32,
    pub is_majority: bool,
}

/// Legend entry for a party in a chamber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub party: String,
    pub members: u32,
    pub color: SeatColor,
}

/// Render-ready grid for one chamber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberLayout {
    pub chamber: String,
    pub total_members: u32,
    pub majority_threshold: u32,
    pub shape: GridShape,
    pub legend: Vec<LegendEntry>,
    pub seats: Vec<Seat>,
}

impl ChamberLayout {
    pub fn build(group: &ChamberGroup) -> Self {
        let shape = GridShape::for_total(group.total_members);
        let mut seats = Vec::new();
        let mut running_index: u32 = 0;

        for (party_index, party) in group.parties.iter().enumerate() {
            for _ in 0..party.members {
                let index = running_index;
                let Some((row, col)) = shape.position_of(index) else {
                    // Only reachable when the total saturated
                    break;
                };
                running_index = running_index.saturating_add(1);

                seats.push(Seat {
                    index,
                    party_index,
                    party: party.party.clone(),
                    color: party.color,
                    row,
                    col,
                    is_majority: is_majority_index(index, group.majority_threshold),
                });
            }
        }

        let legend = group
            .parties
            .iter()
            .map(|p| LegendEntry {
                party: p.party.clone(),
                members: p.members,
                color: p.color,
            })
            .collect();

        Self {
            chamber: group.chamber.clone(),
            total_members: group.total_members,
            majority_threshold: group.majority_threshold,
            shape,
            legend,
            seats,
        }
    }

    /// True when there is nothing to draw for this chamber
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// The seat carrying the majority marker, if any
    pub fn majority_seat(&self) -> Option<&Seat> {
        self.seats.iter().find(|s| s.is_majority)
    }

    /// Seats of grid row `row`, left to right
    pub fn row(&self, row: u32) -> Vec<&Seat> {
        let mut seats: Vec<&Seat> = self.seats.iter().filter(|s| s.row == row).collect();
        seats.sort_by_key(|s| s.col);
        seats
    }

    /// Heading shown above the grid, e.g. `Senate (100)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.chamber, self.total_members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::chamber::group_by_chamber;
    use crate::seating::party::PartyRecord;

    fn group(members: &[u32]) -> ChamberGroup {
        let parties = members
            .iter()
            .enumerate()
            .map(|(i, &m)| PartyRecord::new("X", format!("P{i}"), m, SeatColor::WHITE))
            .collect();
        ChamberGroup::new("X", parties)
    }

    #[test]
    fn test_three_and_two_marks_third_seat() {
        let layout = ChamberLayout::build(&group(&[3, 2]));

        assert_eq!(layout.total_members, 5);
        assert_eq!(layout.majority_threshold, 2);
        let indices: Vec<u32> = layout.seats.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);

        let marked: Vec<u32> = layout
            .seats
            .iter()
            .filter(|s| s.is_majority)
            .map(|s| s.index)
            .collect();
        assert_eq!(marked, vec![2]);
        assert_eq!(layout.majority_seat().unwrap().party_index, 0);
    }

    #[test]
    fn test_seats_follow_party_order() {
        let layout = ChamberLayout::build(&group(&[2, 0, 3]));
        let owners: Vec<usize> = layout.seats.iter().map(|s| s.party_index).collect();
        assert_eq!(owners, vec![0, 0, 2, 2, 2]);
        assert_eq!(layout.legend.len(), 3);
        assert_eq!(layout.legend[1].members, 0);
    }

    #[test]
    fn test_exactly_one_marker() {
        for total in 1..=200 {
            let layout = ChamberLayout::build(&group(&[total]));
            let marked = layout.seats.iter().filter(|s| s.is_majority).count();
            assert_eq!(marked, 1, "total {total}");
        }
    }

    #[test]
    fn test_positions_cover_grid_once() {
        let layout = ChamberLayout::build(&group(&[7, 5]));
        assert_eq!(layout.shape, GridShape { rows: 3, cols: 4 });
        let mut cells: Vec<(u32, u32)> = layout.seats.iter().map(|s| (s.row, s.col)).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 12);
        assert_eq!(layout.row(0).len(), 4);
    }

    #[test]
    fn test_empty_chamber_renders_nothing() {
        let layout = ChamberLayout::build(&group(&[0, 0]));
        assert!(layout.is_empty());
        assert!(layout.seats.is_empty());
        assert!(layout.majority_seat().is_none());
        assert_eq!(layout.shape, GridShape::EMPTY);
    }

    #[test]
    fn test_title() {
        let records = vec![
            PartyRecord::new("Senate", "R", 53, SeatColor::RED),
            PartyRecord::new("Senate", "D", 47, SeatColor::BLUE),
        ];
        let layout = ChamberLayout::build(&group_by_chamber(&records)[0]);
        assert_eq!(layout.title(), "Senate (100)");
        assert_eq!(layout.shape, GridShape { rows: 10, cols: 10 });
        let marker = layout.majority_seat().unwrap();
        assert_eq!(marker.index, 50);
        assert_eq!(marker.party, "R");
        assert_eq!(marker.color, SeatColor::RED);
    }
}
