use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::listings::{ListingNormalizer, ListingPayload};
use crate::models::Property;
use crate::seed::initial_properties;

/// Which properties a listing view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
}

/// The application's owned collection of properties plus the currently
/// selected one. Newest records sit at the front.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    properties: Vec<Property>,
    selected_id: Option<String>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// A portfolio holding the startup seed records, first one selected.
    pub fn with_seed() -> Self {
        let properties = initial_properties();
        let selected_id = properties.first().map(|p| p.id.clone());
        Self {
            properties,
            selected_id,
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Insert a new property at the front and select it.
    pub fn add(&mut self, property: Property) -> Result<&Property, PortfolioError> {
        property.validate()?;
        if self.get(&property.id).is_some() {
            return Err(PortfolioError::DuplicateId(property.id));
        }

        info!("Adding {} ({})", property.address, property.id);
        self.selected_id = Some(property.id.clone());
        self.properties.insert(0, property);
        Ok(&self.properties[0])
    }

    /// Normalize a listing and add the result.
    pub fn import(
        &mut self,
        normalizer: &ListingNormalizer,
        payload: ListingPayload,
    ) -> Result<&Property, PortfolioError> {
        let property = normalizer.normalize(payload)?;
        self.add(property)
    }

    /// Replace the stored record that shares `property.id`.
    pub fn update(&mut self, property: Property) -> Result<(), PortfolioError> {
        property.validate()?;
        let slot = self
            .properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| PortfolioError::UnknownId(property.id.clone()))?;

        debug!("Updating {}", property.id);
        *slot = property;
        Ok(())
    }

    /// Flip the favorite flag, returning the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, PortfolioError> {
        let property = self
            .properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PortfolioError::UnknownId(id.to_string()))?;

        property.is_favorite = !property.is_favorite;
        Ok(property.is_favorite)
    }

    /// Delete a property. Removing the selected one selects the first
    /// remaining record, if any.
    pub fn remove(&mut self, id: &str) -> Result<Property, PortfolioError> {
        let index = self
            .properties
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PortfolioError::UnknownId(id.to_string()))?;

        let removed = self.properties.remove(index);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = self.properties.first().map(|p| p.id.clone());
        }

        info!("Removed {} ({})", removed.address, removed.id);
        Ok(removed)
    }

    pub fn select(&mut self, id: &str) -> Result<(), PortfolioError> {
        if self.get(id).is_none() {
            return Err(PortfolioError::UnknownId(id.to_string()));
        }
        self.selected_id = Some(id.to_string());
        Ok(())
    }

    /// The selected property, or the first one when nothing valid is selected.
    pub fn selected(&self) -> Option<&Property> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.get(id))
            .or_else(|| self.properties.first())
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| match filter {
                Filter::All => true,
                Filter::Favorites => p.is_favorite,
            })
            .collect()
    }
}
