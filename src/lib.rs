//! # Boxcut
//!
//! Cut geometry generator for tabbed (finger-jointed) boxes on a laser
//! cutter, with:
//! - Internal or external dimensioning
//! - Per-axis tab counts, half tabs and corner cubes
//! - Kerf compensation for tight fits, with press-fit dimples
//! - Perfectly packed layouts at zero kerf (coincident cuts made once)
//!
//! ## Architecture
//!
//! Boxcut is organized as a workspace:
//!
//! 1. **boxcut-core** - Error types and unit handling
//! 2. **boxcut-designer** - Parameter resolution, panel geometry,
//!    layout planning, SVG rendering
//! 3. **boxcut** - The command line binary

pub use boxcut_core::{
    format_length, get_unit_label, parse_length, BoxError, ConfigurationError, GeometryError,
    MeasurementSystem, Result,
};

pub use boxcut_designer::{
    generate, panel_outline, plan, render, BoxLayout, BoxOptions, BoxSpec, DimpleStyle, LineStyle,
    PanelPath, PanelRole, PathCommand, PlacedPanel,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout free for SVG output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
