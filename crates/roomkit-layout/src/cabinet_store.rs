//! Non-historied cabinet collection.
//!
//! Cabinets live outside the layout history: drags write through on every
//! frame and undo/redo never touches them.

use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogTemplate, PricingService};
use crate::geometry::Point;
use crate::ids::{check_ids, IdAllocator};
use crate::layout_store::{validate_dimension, validate_point};
use crate::model::{Cabinet, CabinetPatch, Rotation};
use roomkit_core::LayoutError;

/// Owns the cabinets, the catalog and the optional pricing collaborator.
pub struct CabinetStore {
    cabinets: Vec<Cabinet>,
    ids: IdAllocator,
    catalog: Catalog,
    pricing: Option<Box<dyn PricingService>>,
}

impl CabinetStore {
    pub fn new() -> Self {
        Self {
            cabinets: Vec::new(),
            ids: IdAllocator::new(),
            catalog: Catalog::default(),
            pricing: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_pricing(mut self, pricing: impl PricingService + 'static) -> Self {
        self.pricing = Some(Box::new(pricing));
        self
    }

    pub fn set_pricing(&mut self, pricing: Option<Box<dyn PricingService>>) {
        self.pricing = pricing;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn all(&self) -> &[Cabinet] {
        &self.cabinets
    }

    pub fn get(&self, id: u64) -> Option<&Cabinet> {
        self.cabinets.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cabinets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cabinets.is_empty()
    }

    pub fn max_id(&self) -> Option<u64> {
        self.cabinets.iter().map(|c| c.id).max()
    }

    /// Id floor above which loaded cabinets must be numbered.
    pub fn id_floor(&self) -> u64 {
        self.ids.floor(self.max_id())
    }

    /// Adds a cabinet, assigning a fresh id. The incoming id is ignored.
    pub fn add(&mut self, mut cabinet: Cabinet) -> Result<u64, LayoutError> {
        validate_cabinet(&cabinet)?;
        cabinet.id = self.ids.allocate(self.max_id());
        if cabinet.price.is_none() {
            cabinet.price = self.price_of(&cabinet);
        }
        let id = cabinet.id;
        debug!("Added cabinet {} ({})", id, cabinet.cabinet_type);
        self.cabinets.push(cabinet);
        Ok(id)
    }

    /// Adds a cabinet seeded from a catalog entry at `position`.
    pub fn add_from_catalog(&mut self, label: &str, position: Point) -> Result<u64, LayoutError> {
        let template = self
            .catalog
            .get(label)
            .ok_or_else(|| LayoutError::CatalogEntryNotFound {
                label: label.to_string(),
            })?;
        let cabinet = seed_from(template, position);
        self.add(cabinet)
    }

    /// Inserts cabinets that already carry ids (template load).
    pub(crate) fn insert_loaded(&mut self, cabinets: Vec<Cabinet>) {
        for cabinet in cabinets {
            self.ids.observe(cabinet.id);
            self.cabinets.push(cabinet);
        }
    }

    /// Applies a partial update. Re-prices when a pricing input changed.
    pub fn update(&mut self, id: u64, patch: &CabinetPatch) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        let mut next = patch.apply(&self.cabinets[index]);
        validate_cabinet(&next)?;
        if patch.touches_pricing() {
            if let Some(price) = self.price_of(&next) {
                next.price = Some(price);
            }
        }
        self.cabinets[index] = next;
        Ok(())
    }

    pub fn move_to(&mut self, id: u64, position: Point) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        let cabinet = &mut self.cabinets[index];
        cabinet.x = position.x;
        cabinet.y = position.y;
        Ok(())
    }

    pub fn set_rotation(&mut self, id: u64, rotation: Rotation) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        self.cabinets[index].rotation = rotation;
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Result<Cabinet, LayoutError> {
        let index = self.index_of(id)?;
        Ok(self.cabinets.remove(index))
    }

    pub fn clear(&mut self) {
        self.cabinets.clear();
    }

    fn index_of(&self, id: u64) -> Result<usize, LayoutError> {
        self.cabinets
            .iter()
            .position(|c| c.id == id)
            .ok_or(LayoutError::CabinetNotFound { id })
    }

    fn price_of(&self, cabinet: &Cabinet) -> Option<f64> {
        let pricing = self.pricing.as_ref()?;
        let Some(template) = self.catalog.template_for(cabinet) else {
            warn!("No catalog template for cabinet {}, keeping old price", cabinet.id);
            return None;
        };
        Some(pricing.calculate_price(
            template,
            &cabinet.finish_id,
            &cabinet.door_style_id,
            &cabinet.handle_type,
            cabinet.num_handles,
        ))
    }
}

impl Default for CabinetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CabinetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CabinetStore")
            .field("cabinets", &self.cabinets)
            .field("ids", &self.ids)
            .field("catalog", &self.catalog.len())
            .field("pricing", &self.pricing.is_some())
            .finish()
    }
}

fn seed_from(template: &CatalogTemplate, position: Point) -> Cabinet {
    let mut cabinet = Cabinet::new(
        template.cabinet_type.clone(),
        template.width,
        template.height,
        template.depth,
        position,
    );
    cabinet.catalog_ref = Some(template.label.clone());
    cabinet.label = Some(template.label.clone());
    cabinet
}

pub(crate) fn validate_cabinet(cabinet: &Cabinet) -> Result<(), LayoutError> {
    validate_dimension("width", cabinet.width)?;
    validate_dimension("height", cabinet.height)?;
    validate_dimension("depth", cabinet.depth)?;
    validate_point("origin", cabinet.origin())
}

/// Validates cabinets that keep their ids, as read from a layout file.
pub(crate) fn validate_cabinets(cabinets: &[Cabinet]) -> Result<(), LayoutError> {
    check_ids("cabinet", cabinets.iter().map(|c| c.id))?;
    cabinets.iter().try_for_each(validate_cabinet)
}
