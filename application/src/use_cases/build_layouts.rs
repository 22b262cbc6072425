//! Build Chamber Layouts use case
//!
//! Runs the layout pipeline over the current composition:
//! records → chamber groups → one [`ChamberLayout`] per chamber.
//! Callers re-run it after every edit; nothing is cached between runs.

use legislation_domain::{ChamberLayout, Composition};
use tracing::debug;

/// Use case for deriving render-ready chamber layouts
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildChamberLayoutsUseCase;

impl BuildChamberLayoutsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, composition: &Composition) -> Vec<ChamberLayout> {
        let layouts: Vec<ChamberLayout> = composition
            .chambers()
            .iter()
            .map(ChamberLayout::build)
            .collect();

        for layout in &layouts {
            debug!(
                chamber = %layout.chamber,
                total = layout.total_members,
                shape = %layout.shape,
                threshold = layout.majority_threshold,
                "Built chamber layout"
            );
        }

        layouts
    }
}
