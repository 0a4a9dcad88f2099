use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

/// Value Object - a 2D point in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Value Object - container bounding box in page viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Geometric center in container-local coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert a client (page viewport) position into container-local space.
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }
}

/// Value Object - uniform scale followed by translation.
///
/// A content point `p` renders at `offset + p * scale` in container space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { scale: 1.0, offset_x: 0.0, offset_y: 0.0 };

    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self { scale, offset_x, offset_y }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn content_to_container(&self, p: Point) -> Point {
        Point::new(self.offset_x + p.x * self.scale, self.offset_y + p.y * self.scale)
    }

    pub fn container_to_content(&self, p: Point) -> Point {
        Point::new((p.x - self.offset_x) / self.scale, (p.y - self.offset_y) / self.scale)
    }

    /// Rescale to `new_scale`, keeping the content point under `anchor` fixed.
    pub fn zoomed_about(&self, new_scale: f64, anchor: Point) -> Transform {
        let factor = new_scale / self.scale;
        Transform {
            scale: new_scale,
            offset_x: anchor.x + (self.offset_x - anchor.x) * factor,
            offset_y: anchor.y + (self.offset_y - anchor.y) * factor,
        }
    }

    pub fn panned(&self, delta_x: f64, delta_y: f64) -> Transform {
        Transform { offset_x: self.offset_x + delta_x, offset_y: self.offset_y + delta_y, ..*self }
    }

    /// CSS `transform` property value; the wrapper uses `transform-origin: 0 0`.
    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.offset_x, self.offset_y, self.scale)
    }
}

/// Value Object - immutable controller configuration.
///
/// Deserializes from the camelCase option object accepted by the JS API.
/// Unknown keys are ignored and missing keys fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Additive scale step applied per button press or wheel notch.
    pub zoom_factor: f64,
    pub wheel_zoom_enabled: bool,
    pub drag_pan_enabled: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.3,
            max_scale: 3.0,
            zoom_factor: 0.1,
            wheel_zoom_enabled: true,
            drag_pan_enabled: true,
        }
    }
}

impl ViewportConfig {
    /// Defaults used by the graph page factory, which allows deeper zoom.
    pub fn graph_defaults() -> Self {
        Self { max_scale: 5.0, ..Self::default() }
    }

    /// Parse an option object on top of [`ViewportConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Self::default().merge_json(json)
    }

    /// Overlay the keys present in `json` on `self`.
    ///
    /// Non-object JSON (`null`, numbers, arrays) leaves `self` unchanged.
    pub fn merge_json(self, json: &str) -> Result<Self, serde_json::Error> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(self)?;
        if let (Some(base), Some(overrides)) = (merged.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        }
        let config: ViewportConfig = serde_json::from_value(merged)?;
        Ok(config.sanitized())
    }

    /// Replace out-of-domain numeric fields with defaults so scale clamping
    /// always has a valid, finite `[min_scale, max_scale]` range.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        if !(config.min_scale.is_finite() && config.min_scale > 0.0) {
            report_replaced("minScale", config.min_scale, defaults.min_scale);
            config.min_scale = defaults.min_scale;
        }
        if !(config.max_scale.is_finite() && config.max_scale >= config.min_scale) {
            let fallback = defaults.max_scale.max(config.min_scale);
            report_replaced("maxScale", config.max_scale, fallback);
            config.max_scale = fallback;
        }
        if !(config.zoom_factor.is_finite() && config.zoom_factor > 0.0) {
            report_replaced("zoomFactor", config.zoom_factor, defaults.zoom_factor);
            config.zoom_factor = defaults.zoom_factor;
        }
        config
    }

    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

fn report_replaced(option: &str, given: f64, used: f64) {
    get_logger().log_with_metadata(
        LogLevel::Warn,
        LogComponent::Domain("ViewportConfig"),
        &format!("Invalid {} option replaced with {}", option, used),
        &format!("{}={}", option, given),
    );
}

/// Value Object - commands exposed to the zoom control cluster
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr, IntoStaticStr,
)]
pub enum ControlCommand {
    #[display(fmt = "Zoom In")]
    #[strum(serialize = "zoom-in")]
    ZoomIn,
    #[display(fmt = "Zoom Out")]
    #[strum(serialize = "zoom-out")]
    ZoomOut,
    #[display(fmt = "Reset View")]
    #[strum(serialize = "reset")]
    Reset,
}

impl ControlCommand {
    /// Wire name accepted by `GraphViewport::command`.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Glyph shown on the button.
    pub fn glyph(&self) -> &'static str {
        match self {
            ControlCommand::ZoomIn => "+",
            ControlCommand::ZoomOut => "\u{2212}",
            ControlCommand::Reset => "\u{27f2}",
        }
    }
}
