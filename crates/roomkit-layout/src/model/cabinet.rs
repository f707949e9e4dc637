use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point};
use roomkit_core::units::inches_to_px;

/// Cardinal cabinet rotation. Serialized as the number of degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(&self) -> f64 {
        f64::from(u16::from(*self))
    }

    /// Rotation after turning a further 90 degrees clockwise.
    pub fn turned(&self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> u16 {
        match r {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("rotation must be 0, 90, 180 or 270, got {}", other)),
        }
    }
}

/// A placeable, rotatable, priced cabinet.
///
/// `width`, `height` and `depth` are in inches; `x`/`y` is the top-left corner
/// of the unrotated footprint in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabinet {
    pub id: u64,
    #[serde(rename = "type")]
    pub cabinet_type: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub finish: String,
    #[serde(default)]
    pub finish_id: String,
    #[serde(default)]
    pub door_style_id: String,
    #[serde(default)]
    pub handle_type: String,
    #[serde(default)]
    pub num_handles: u32,
    #[serde(default)]
    pub has_drawers: bool,
    #[serde(default)]
    pub num_drawers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Cabinet {
    /// Creates an unpriced cabinet with empty presentation metadata.
    pub fn new(
        cabinet_type: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        position: Point,
    ) -> Self {
        Self {
            id: 0,
            cabinet_type: cabinet_type.into(),
            width,
            height,
            depth,
            x: position.x,
            y: position.y,
            rotation: Rotation::Deg0,
            brand: String::new(),
            finish: String::new(),
            finish_id: String::new(),
            door_style_id: String::new(),
            handle_type: String::new(),
            num_handles: 0,
            has_drawers: false,
            num_drawers: 0,
            price: None,
            catalog_ref: None,
            label: None,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Unrotated footprint in pixels: `width * 2` by `depth * 2` at `(x, y)`.
    pub fn footprint(&self) -> Bounds {
        Bounds::from_rect(
            self.x,
            self.y,
            inches_to_px(self.width),
            inches_to_px(self.depth),
        )
    }

    /// Center of the unrotated footprint, the pivot for rotate gestures.
    pub fn center(&self) -> Point {
        self.footprint().center()
    }
}

/// Partial cabinet update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetPatch {
    pub cabinet_type: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<Rotation>,
    pub brand: Option<String>,
    pub finish: Option<String>,
    pub finish_id: Option<String>,
    pub door_style_id: Option<String>,
    pub handle_type: Option<String>,
    pub num_handles: Option<u32>,
    pub has_drawers: Option<bool>,
    pub num_drawers: Option<u32>,
    pub catalog_ref: Option<String>,
    pub label: Option<String>,
}

impl CabinetPatch {
    /// True when the patch changes an input of the pricing collaborator.
    pub fn touches_pricing(&self) -> bool {
        self.catalog_ref.is_some()
            || self.finish_id.is_some()
            || self.door_style_id.is_some()
            || self.handle_type.is_some()
            || self.num_handles.is_some()
    }

    /// Returns a patched copy of `cabinet`.
    pub fn apply(&self, cabinet: &Cabinet) -> Cabinet {
        let mut c = cabinet.clone();
        if let Some(v) = &self.cabinet_type {
            c.cabinet_type = v.clone();
        }
        if let Some(v) = self.width {
            c.width = v;
        }
        if let Some(v) = self.height {
            c.height = v;
        }
        if let Some(v) = self.depth {
            c.depth = v;
        }
        if let Some(v) = self.x {
            c.x = v;
        }
        if let Some(v) = self.y {
            c.y = v;
        }
        if let Some(v) = self.rotation {
            c.rotation = v;
        }
        if let Some(v) = &self.brand {
            c.brand = v.clone();
        }
        if let Some(v) = &self.finish {
            c.finish = v.clone();
        }
        if let Some(v) = &self.finish_id {
            c.finish_id = v.clone();
        }
        if let Some(v) = &self.door_style_id {
            c.door_style_id = v.clone();
        }
        if let Some(v) = &self.handle_type {
            c.handle_type = v.clone();
        }
        if let Some(v) = self.num_handles {
            c.num_handles = v;
        }
        if let Some(v) = self.has_drawers {
            c.has_drawers = v;
        }
        if let Some(v) = self.num_drawers {
            c.num_drawers = v;
        }
        if let Some(v) = &self.catalog_ref {
            c.catalog_ref = Some(v.clone());
        }
        if let Some(v) = &self.label {
            c.label = Some(v.clone());
        }
        c
    }
}
