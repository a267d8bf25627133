//! Pointer surface metrics used by the card glow effect.
//!
//! # Responsibility
//! - Compute clamped percent position, center offset, direction angle and
//!   edge closeness of a pointer relative to a rectangle.
//! - Produce display-rounded glow parameters for renderers.
//!
//! # Invariants
//! - `percent_x`/`percent_y` are always within `[0, 100]`.
//! - `angle_degrees` is always within `[0, 360)`; straight up is `0`.
//! - `edge_closeness` is always within `[0, 1]`; `0` at the center.
//! - Display rounding truncates to 3 decimals and feeds nothing else.

use std::error::Error;
use std::fmt::{Display, Formatter};

const DISPLAY_DECIMALS_SCALE: f64 = 1000.0;

/// Rectangle in the same coordinate space as pointer samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns whether the rectangle has a positive finite area.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    fn half_extent(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Pointer position relative to a surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePosition {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub percent_x: f64,
    pub percent_y: f64,
}

/// Derived metrics for one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSurfaceMetrics {
    pub percent_x: f64,
    pub percent_y: f64,
    pub angle_degrees: f64,
    pub edge_closeness: f64,
}

impl PointerSurfaceMetrics {
    /// Metrics reported for a surface without area: center, 0°, closeness 0.
    pub const NEUTRAL: Self = Self {
        percent_x: 50.0,
        percent_y: 50.0,
        angle_degrees: 0.0,
        edge_closeness: 0.0,
    };
}

/// Glow values bound by a renderer to its pointer style variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowParameters {
    /// Horizontal pointer position, percent.
    pub pointer_x: f64,
    /// Vertical pointer position, percent.
    pub pointer_y: f64,
    /// Light direction, degrees.
    pub angle_degrees: f64,
    /// Edge closeness scaled to `[0, 100]`.
    pub edge_percent: f64,
}

/// Geometry failure surfaced only by the `try_` entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    DegenerateSurface { width: f64, height: f64 },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateSurface { width, height } => {
                write!(f, "surface has no area: width={width} height={height}")
            }
        }
    }
}

impl Error for GeometryError {}

/// Computes pixel and clamped percent position of a pointer.
///
/// # Errors
/// - Returns `DegenerateSurface` when width or height is not positive.
pub fn try_relative_position(
    rect: &SurfaceRect,
    pointer_x: f64,
    pointer_y: f64,
) -> Result<RelativePosition, GeometryError> {
    if !rect.has_area() {
        return Err(GeometryError::DegenerateSurface {
            width: rect.width,
            height: rect.height,
        });
    }

    let pixel_x = pointer_x - rect.left;
    let pixel_y = pointer_y - rect.top;
    Ok(RelativePosition {
        pixel_x,
        pixel_y,
        percent_x: clamp_percent(100.0 * pixel_x / rect.width),
        percent_y: clamp_percent(100.0 * pixel_y / rect.height),
    })
}

/// Same as [`try_relative_position`], but maps a degenerate surface to its
/// midpoint (50%, 50%) instead of failing.
pub fn relative_position(rect: &SurfaceRect, pointer_x: f64, pointer_y: f64) -> RelativePosition {
    try_relative_position(rect, pointer_x, pointer_y).unwrap_or_else(|_| {
        let (cx, cy) = rect.half_extent();
        RelativePosition {
            pixel_x: cx,
            pixel_y: cy,
            percent_x: 50.0,
            percent_y: 50.0,
        }
    })
}

/// Offset of a surface-relative pixel position from the surface center.
pub fn center_offset(rect: &SurfaceRect, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
    let (cx, cy) = rect.half_extent();
    (pixel_x - cx, pixel_y - cy)
}

/// Direction from center to pointer, rotated so that "up" is 0°.
pub fn angle_from_offset(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let mut degrees = dy.atan2(dx).to_degrees() + 90.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    // Tiny negative angles round up to exactly 360.0 after the shift.
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    degrees
}

/// Closeness of a pixel position to the nearest bounding edge.
///
/// Scales the center offset so that the closer of the horizontal/vertical
/// edges maps to `1`, independent of aspect ratio.
pub fn edge_closeness(rect: &SurfaceRect, pixel_x: f64, pixel_y: f64) -> f64 {
    if !rect.has_area() {
        return 0.0;
    }

    let (cx, cy) = rect.half_extent();
    let (dx, dy) = center_offset(rect, pixel_x, pixel_y);
    let kx = if dx != 0.0 { cx / dx.abs() } else { f64::INFINITY };
    let ky = if dy != 0.0 { cy / dy.abs() } else { f64::INFINITY };
    (1.0 / kx.min(ky)).clamp(0.0, 1.0)
}

/// Computes all metrics for one pointer sample.
pub fn surface_metrics(rect: &SurfaceRect, pointer_x: f64, pointer_y: f64) -> PointerSurfaceMetrics {
    let Ok(position) = try_relative_position(rect, pointer_x, pointer_y) else {
        return PointerSurfaceMetrics::NEUTRAL;
    };

    let (dx, dy) = center_offset(rect, position.pixel_x, position.pixel_y);
    PointerSurfaceMetrics {
        percent_x: position.percent_x,
        percent_y: position.percent_y,
        angle_degrees: angle_from_offset(dx, dy),
        edge_closeness: edge_closeness(rect, position.pixel_x, position.pixel_y),
    }
}

/// Computes display-rounded glow values for one pointer sample.
pub fn glow_parameters(rect: &SurfaceRect, pointer_x: f64, pointer_y: f64) -> GlowParameters {
    let metrics = surface_metrics(rect, pointer_x, pointer_y);
    GlowParameters {
        pointer_x: display_round(metrics.percent_x),
        pointer_y: display_round(metrics.percent_y),
        angle_degrees: display_round(metrics.angle_degrees),
        edge_percent: display_round(metrics.edge_closeness * 100.0),
    }
}

/// Truncates to 3 decimal places for display.
pub fn display_round(value: f64) -> f64 {
    (value * DISPLAY_DECIMALS_SCALE).trunc() / DISPLAY_DECIMALS_SCALE
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
