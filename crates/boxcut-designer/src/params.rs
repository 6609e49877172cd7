//! Parameter resolution.
//!
//! Raw, UI-shaped options resolve once into a canonical [`BoxSpec`]
//! that every generator consumes. All derived quantities (kerf
//! snapping, external-to-internal sizing, kerf inflation, fractional
//! tab counts, gap play) are computed here and nowhere else.

use serde::{Deserialize, Serialize};
use tracing::debug;

use boxcut_core::error::ConfigurationError;

/// Kerf values below this are treated as a perfect fit (zero kerf).
pub const KERF_SNAP_EPSILON: f64 = 0.01;

/// Dimple bump shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimpleStyle {
    /// Two straight flanks. Cheaper to cut.
    Triangular,
    /// A half-round cubic bump. Better grip.
    #[default]
    Rounded,
}

/// Raw box options as a host supplies them.
///
/// Dimensions are interior sizes unless `external_dimensions` is set.
/// All lengths share one unit; the core never converts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxOptions {
    /// Box width (X of the lid).
    pub width: f64,
    /// Box length (Y of the lid).
    pub length: f64,
    /// Box height.
    pub height: f64,
    /// Material thickness.
    pub thickness: f64,
    /// Interpret width/length/height as outside measurements.
    pub external_dimensions: bool,
    /// Generate a lid panel; without one the top face stays open.
    pub with_lid: bool,
    /// Tabs along the width.
    pub tabs_width: u32,
    /// Tabs along the length.
    pub tabs_length: u32,
    /// Tabs along the height.
    pub tabs_height: u32,
    /// Corner cubes on the short sides.
    pub corners: bool,
    /// Half-width tabs at row ends.
    pub half_tabs: bool,
    /// Cut width of the beam; 0 for a perfect-fit friction layout.
    pub kerf: f64,
    /// Kerf taken from a material preset; overrides `kerf` when set.
    pub kerf_by_material: Option<f64>,
    /// Stroke width follows the kerf in rendered output.
    pub line_width_from_kerf: bool,
    /// Keep panels apart even with zero kerf.
    pub force_separation: bool,
    /// Press-fit bumps on tab flanks (needs a positive kerf).
    pub dimples: bool,
    /// Bump shape.
    pub dimple_style: DimpleStyle,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            width: 30.0,
            length: 50.0,
            height: 20.0,
            thickness: 3.0,
            external_dimensions: false,
            with_lid: true,
            tabs_width: 3,
            tabs_length: 3,
            tabs_height: 3,
            corners: true,
            half_tabs: true,
            kerf: 0.0,
            kerf_by_material: None,
            line_width_from_kerf: true,
            force_separation: false,
            dimples: false,
            dimple_style: DimpleStyle::default(),
        }
    }
}

/// Canonical working values for one box. Everything downstream of the
/// resolver reads these and only these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Working width: interior width plus kerf.
    pub width: f64,
    /// Working length: interior length plus kerf.
    pub length: f64,
    /// Working height: interior height plus kerf.
    pub height: f64,
    /// Material thickness.
    pub thickness: f64,
    /// Snapped kerf.
    pub kerf: f64,
    /// Perfect-fit kerf: equals `kerf` normally, 0 when dimples take
    /// over the press fit.
    pub kerf_pf: f64,
    /// Kerf play distributed around each joint: `kerf / 4`.
    pub gap: f64,
    /// Tab count along the width; fractional when half tabs are off.
    pub tabs_width: f64,
    /// Tab count along the length.
    pub tabs_length: f64,
    /// Tab count along the height.
    pub tabs_height: f64,
    pub corners: bool,
    pub half_tabs: bool,
    pub dimples: bool,
    pub dimple_style: DimpleStyle,
    pub with_lid: bool,
    pub force_separation: bool,
    /// Stroke width follows the kerf in rendered output.
    pub line_width_from_kerf: bool,
}

impl BoxSpec {
    /// Whether panels are laid out apart rather than packed edge to
    /// edge. Packing is only possible with a perfect fit.
    pub fn separated(&self) -> bool {
        self.kerf > 0.0 || self.force_separation
    }
}

impl BoxOptions {
    /// Resolve raw options into a validated [`BoxSpec`].
    ///
    /// Fails fast on the first invalid parameter; no partial spec is
    /// ever produced.
    pub fn resolve(&self) -> Result<BoxSpec, ConfigurationError> {
        for (name, value) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
            ("thickness", self.thickness),
        ] {
            if value <= 0.0 {
                return Err(ConfigurationError::NonPositive { name, value });
            }
        }

        let mut kerf = self.kerf_by_material.unwrap_or(self.kerf);
        if kerf < 0.0 {
            return Err(ConfigurationError::NegativeKerf(kerf));
        }
        if kerf < KERF_SNAP_EPSILON {
            if kerf > 0.0 {
                debug!(kerf, "kerf below snap threshold, treating as perfect fit");
            }
            kerf = 0.0;
        }

        // Disabling half tabs rounds each edge up by half a tab so the
        // row still starts and ends on a full tab.
        let extra = if self.half_tabs { 0.0 } else { 0.5 };
        let tabs = [
            ("width", self.tabs_width as f64 + extra),
            ("length", self.tabs_length as f64 + extra),
            ("height", self.tabs_height as f64 + extra),
        ];
        for (axis, count) in tabs {
            if count < 1.0 {
                return Err(ConfigurationError::TabCount { axis, count });
            }
        }

        let wall = 2.0 * self.thickness;
        let (mut width, mut length, mut height) = (self.width, self.length, self.height);
        if self.external_dimensions {
            for (axis, value) in [("width", width), ("length", length), ("height", height)] {
                if value - wall <= 0.0 {
                    return Err(ConfigurationError::NoInterior {
                        axis,
                        value,
                        thickness: self.thickness,
                    });
                }
            }
            width -= wall;
            length -= wall;
            height -= wall;
        }

        // Every cut loses half a kerf on each side, so working
        // dimensions grow by one kerf to compensate.
        width += kerf;
        length += kerf;
        height += kerf;

        let dimples = self.dimples && kerf > 0.0;
        let kerf_pf = if dimples { 0.0 } else { kerf };

        Ok(BoxSpec {
            width,
            length,
            height,
            thickness: self.thickness,
            kerf,
            kerf_pf,
            gap: kerf / 4.0,
            tabs_width: tabs[0].1,
            tabs_length: tabs[1].1,
            tabs_height: tabs[2].1,
            corners: self.corners,
            half_tabs: self.half_tabs,
            dimples,
            dimple_style: self.dimple_style,
            with_lid: self.with_lid,
            force_separation: self.force_separation,
            line_width_from_kerf: self.line_width_from_kerf,
        })
    }
}
