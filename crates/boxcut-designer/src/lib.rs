//! # Boxcut Designer
//!
//! Cut geometry for tabbed (finger-jointed) boxes:
//! - Parameter resolution with kerf compensation and snapping
//! - Joint segments with optional press-fit dimples
//! - Six panel outlines with corner cubes and half-tab control
//! - Packed layouts that elide coincident cuts at zero kerf
//! - SVG rendering with external/internal line palettes
//!
//! The pipeline is resolve -> plan -> render; each stage is a pure
//! function of the one before it.

pub mod joint;
pub mod layout;
pub mod panels;
pub mod params;
pub mod path;
pub mod style;
pub mod svg;

pub use joint::{dimple_dimensions, generate_joint, Axis, GapOffsets, Joint};
pub use layout::{plan, BoxLayout, PlacedPanel};
pub use panels::{panel_outline, PanelRole};
pub use params::{BoxOptions, BoxSpec, DimpleStyle, KERF_SNAP_EPSILON};
pub use path::{PanelPath, PathCommand};
pub use style::{LineStyle, DEFAULT_STROKE_WIDTH};
pub use svg::{render, SvgDocument};

use boxcut_core::error::Result;

/// Resolve options and plan the sheet in one step.
pub fn generate(options: &BoxOptions) -> Result<BoxLayout> {
    let spec = options.resolve()?;
    Ok(plan(&spec)?)
}
