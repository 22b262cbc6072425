//! Edit Composition use case
//!
//! Applies editor commands to a [`Composition`]. Raw text from the editor
//! is parsed here, at the data-entry boundary, so the domain only ever
//! sees validated member counts and colors.

use crate::ports::country_catalog::CountryCatalog;
use legislation_domain::{Composition, DomainError, PartyEdit, PartyField, PartyRecord};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while editing a composition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditCompositionError {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A single editor action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Append a blank party row
    AddParty,
    /// Remove the row at this index
    RemoveParty(usize),
    /// Apply an already validated edit
    Update(usize, PartyEdit),
    /// Parse `value` for `field` and apply it
    UpdateRaw {
        index: usize,
        field: PartyField,
        value: String,
    },
    /// Select a country, or clear the selection with `None`
    SetCountry(Option<String>),
}

/// What an applied command changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Added(usize),
    Removed(PartyRecord),
    Updated(usize),
    CountryChanged(Option<String>),
}

/// Use case for editing the seat composition
pub struct EditCompositionUseCase<C: CountryCatalog + 'static> {
    catalog: Arc<C>,
}

impl<C: CountryCatalog + 'static> EditCompositionUseCase<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Apply `command` to `composition`.
    ///
    /// On error the composition is left exactly as it was.
    pub fn execute(
        &self,
        composition: &mut Composition,
        command: EditCommand,
    ) -> Result<EditOutcome, EditCompositionError> {
        debug!(?command, "Applying edit");

        match command {
            EditCommand::AddParty => Ok(EditOutcome::Added(composition.add_blank())),
            EditCommand::RemoveParty(index) => {
                let removed = composition.remove(index)?;
                info!(chamber = %removed.chamber, party = %removed.party, "Removed party");
                Ok(EditOutcome::Removed(removed))
            }
            EditCommand::Update(index, edit) => {
                composition.apply(index, edit)?;
                Ok(EditOutcome::Updated(index))
            }
            EditCommand::UpdateRaw {
                index,
                field,
                value,
            } => {
                let edit = field.parse_edit(&value)?;
                composition.apply(index, edit)?;
                Ok(EditOutcome::Updated(index))
            }
            EditCommand::SetCountry(country) => {
                let country = country
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty());
                if let Some(name) = &country
                    && !self.catalog.countries().is_empty()
                    && !self.catalog.contains(name)
                {
                    return Err(EditCompositionError::UnknownCountry(name.clone()));
                }
                composition.set_country(country.clone());
                Ok(EditOutcome::CountryChanged(country))
            }
        }
    }
}
