//! Domain layer for legislation
//!
//! This crate contains the seat composition model and the grid layout
//! engine. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Party record**: one party's seat count and color within a chamber
//! - **Chamber group**: every record of one chamber, with its seat total
//!   and majority threshold (`total / 2`)
//! - **Grid shape**: the most square `rows × cols` factorization of the
//!   seat total
//! - **Majority seat**: the seat whose flattened index equals the threshold

pub mod core;
pub mod seating;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use seating::{
    chamber::{
        ChamberGroup, MAX_CHAMBER_SEATS, chamber_totals, check_chamber_totals, group_by_chamber,
    },
    color::SeatColor,
    composition::Composition,
    grid::{GridShape, divisor_pairs, is_majority_index, majority_threshold},
    layout::{ChamberLayout, LegendEntry, Seat},
    party::{MAX_MEMBERS, PartyEdit, PartyField, PartyRecord, parse_members},
};
