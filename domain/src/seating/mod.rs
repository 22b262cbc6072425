//! Seating — party records, chamber grouping and seat grid layout
//!
//! The layout pipeline is a plain function chain, recomputed from the
//! current records whenever they change:
//!
//! ```text
//! [PartyRecord] ──group_by_chamber──> [ChamberGroup] ──ChamberLayout::build──> [ChamberLayout]
//!                                                          └─ GridShape::for_total
//! ```

pub mod chamber;
pub mod color;
pub mod composition;
pub mod grid;
pub mod layout;
pub mod party;
