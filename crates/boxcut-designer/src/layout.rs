//! Layout planning.
//!
//! Places the six panel outlines on the sheet: lid, back, base and
//! front stacked vertically, the two long sides in a second column.
//! Separated layouts keep three thicknesses between panels; packed
//! layouts butt shared edges together so coincident cuts are made only
//! once. Placement is pure arithmetic over the spec, so the same spec
//! always yields the same sheet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use boxcut_core::error::GeometryError;

use crate::joint::{dimple_dimensions, GapOffsets};
use crate::panels::{panel_outline, PanelRole};
use crate::params::BoxSpec;
use crate::path::PanelPath;

/// One placed panel: its outline anchored at the local origin plus the
/// sheet offset of that origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPanel {
    pub role: PanelRole,
    pub offset: (f64, f64),
    pub path: PanelPath,
}

/// A planned sheet: six placed panels and the whole-drawing shift that
/// clears the sheet margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxLayout {
    pub panels: Vec<PlacedPanel>,
    /// Applied to the whole group: `(2t + kerf/2, 2t + kerf/2)`.
    pub translation: (f64, f64),
}

impl BoxLayout {
    /// Bounding box of every placed panel, translation included,
    /// as (min_x, min_y, max_x, max_y).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for panel in &self.panels {
            let (px, py, qx, qy) = panel.path.bounds();
            min_x = min_x.min(px + panel.offset.0);
            min_y = min_y.min(py + panel.offset.1);
            max_x = max_x.max(qx + panel.offset.0);
            max_y = max_y.max(qy + panel.offset.1);
        }
        if self.panels.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (
            min_x + self.translation.0,
            min_y + self.translation.1,
            max_x + self.translation.0,
            max_y + self.translation.1,
        )
    }
}

/// Reject specs whose tab segments would be consumed by gap
/// corrections, or whose material cannot carry the requested dimple.
fn validate_geometry(spec: &BoxSpec) -> Result<(), GeometryError> {
    if spec.dimples {
        let (radius, _) = dimple_dimensions(spec);
        if radius <= 0.0 {
            return Err(GeometryError::DimpleTooLarge {
                thickness: spec.thickness,
                radius: spec.kerf,
            });
        }
    }

    let offsets = GapOffsets::for_joint(spec, spec.dimples);
    // Largest correction applied to a quarter run and to a half run.
    let quarter_corr = offsets.o0.max(offsets.o2).max(spec.gap);
    let half_corr = if spec.dimples { offsets.o3 } else { offsets.o1 };

    for (axis, edge, tabs) in [
        ("width", spec.width, spec.tabs_width),
        ("length", spec.length, spec.tabs_length),
        ("height", spec.height, spec.tabs_height),
    ] {
        let unit = edge / tabs;
        let quarter = unit / 4.0;
        let half = unit / 2.0;
        if quarter - quarter_corr <= 0.0 {
            return Err(GeometryError::ZeroLengthRun {
                axis,
                segment: quarter,
                correction: quarter_corr,
            });
        }
        if half - half_corr <= 0.0 {
            return Err(GeometryError::ZeroLengthRun {
                axis,
                segment: half,
                correction: half_corr,
            });
        }
    }
    Ok(())
}

/// Plan the sheet for one box.
pub fn plan(spec: &BoxSpec) -> Result<BoxLayout, GeometryError> {
    validate_geometry(spec)?;

    let t = spec.thickness;
    let separated = spec.separated();
    debug!(
        width = spec.width,
        length = spec.length,
        height = spec.height,
        separated,
        "planning box layout"
    );

    let mut panels = Vec::with_capacity(6);
    let mut place = |role: PanelRole, x: f64, y: f64| {
        panels.push(PlacedPanel {
            role,
            offset: (x, y),
            path: panel_outline(spec, role),
        });
    };

    // First column: lid, back, base, front, top to bottom.
    let mut lower = 0.0;
    place(PanelRole::Top, 0.0, lower);

    lower += if separated {
        spec.length + 3.0 * t
    } else if spec.with_lid {
        spec.length + t
    } else {
        spec.length + 2.0 * t
    };
    place(PanelRole::Back, 0.0, lower);

    lower += spec.height + if separated { 3.0 * t } else { t };
    place(PanelRole::Bottom, 0.0, lower);

    lower += spec.length + if separated { 3.0 * t } else { t };
    place(PanelRole::Front, 0.0, lower);

    // Second column: the long sides.
    let mut left = if separated {
        spec.width + 2.0 * t
    } else if spec.with_lid {
        spec.width
    } else {
        spec.width + t
    };
    place(PanelRole::Left, left, 0.0);

    let lower = if separated {
        spec.length + spec.height + 6.0 * t
    } else if spec.with_lid {
        spec.length + spec.height + 2.0 * t
    } else {
        left -= t;
        spec.length + spec.height + 3.0 * t
    };
    place(PanelRole::Right, left, lower);

    Ok(BoxLayout {
        panels,
        translation: (2.0 * t + spec.kerf / 2.0, 2.0 * t + spec.kerf / 2.0),
    })
}
