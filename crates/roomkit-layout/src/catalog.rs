//! Cabinet catalog and the pricing collaborator seam.
//!
//! The catalog is a read-only list of cabinet templates used to seed new
//! cabinets and to resolve pricing inputs. Pricing itself lives outside the
//! engine behind [`PricingService`].

use serde::{Deserialize, Serialize};

use crate::model::Cabinet;

/// A catalog entry describing a purchasable cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTemplate {
    /// Unique catalog label, referenced by `Cabinet::catalog_ref`
    pub label: String,
    /// Cabinet type, e.g. "vanity" or "wall"
    #[serde(rename = "type")]
    pub cabinet_type: String,
    /// Width in inches
    pub width: f64,
    /// Height in inches
    pub height: f64,
    /// Depth in inches
    pub depth: f64,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogTemplate {
    pub fn new(
        label: impl Into<String>,
        cabinet_type: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Self {
        Self {
            label: label.into(),
            cabinet_type: cabinet_type.into(),
            width,
            height,
            depth,
            sub_type: String::new(),
            category: String::new(),
            description: String::new(),
        }
    }

    /// True when this entry has the same type and footprint as `cabinet`.
    pub fn matches_shape(&self, cabinet: &Cabinet) -> bool {
        self.cabinet_type == cabinet.cabinet_type
            && self.width == cabinet.width
            && self.depth == cabinet.depth
    }
}

/// Read-only catalog of cabinet templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogTemplate>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogTemplate>) -> Self {
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<&CatalogTemplate> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Catalog template for a cabinet.
    ///
    /// Resolves `catalog_ref` by label first, then falls back to the first
    /// entry with the cabinet's type, width and depth.
    pub fn template_for(&self, cabinet: &Cabinet) -> Option<&CatalogTemplate> {
        cabinet
            .catalog_ref
            .as_deref()
            .and_then(|label| self.get(label))
            .or_else(|| self.entries.iter().find(|e| e.matches_shape(cabinet)))
    }

    pub fn entries(&self) -> &[CatalogTemplate] {
        &self.entries
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogTemplate> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// External pricing collaborator.
///
/// Called after any cabinet change that can affect price. Pure; no failure
/// mode beyond returning a number.
pub trait PricingService {
    fn calculate_price(
        &self,
        template: &CatalogTemplate,
        finish_id: &str,
        door_style_id: &str,
        handle_type: &str,
        num_handles: u32,
    ) -> f64;
}

impl<F> PricingService for F
where
    F: Fn(&CatalogTemplate, &str, &str, &str, u32) -> f64,
{
    fn calculate_price(
        &self,
        template: &CatalogTemplate,
        finish_id: &str,
        door_style_id: &str,
        handle_type: &str,
        num_handles: u32,
    ) -> f64 {
        self(template, finish_id, door_style_id, handle_type, num_handles)
    }
}
