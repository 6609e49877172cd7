//! Line styles for rendered output.
//!
//! Two fixed palettes: violet for external cut lines, dark green for
//! internal assembly lines. The stroke width defaults to a hairline for
//! visibility and can follow the kerf so the drawn line previews the
//! actual cut width.

use serde::Serialize;

/// Default stroke width when the kerf does not dictate one.
pub const DEFAULT_STROKE_WIDTH: f64 = 0.1;

/// Stroke description for one class of lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub stroke: &'static str,
    pub fill: &'static str,
    pub stroke_width: f64,
    pub stroke_linecap: &'static str,
    pub stroke_linejoin: &'static str,
}

impl LineStyle {
    /// External cut lines (violet).
    pub fn external() -> Self {
        Self {
            stroke: "#660066",
            fill: "none",
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_linecap: "butt",
            stroke_linejoin: "miter",
        }
    }

    /// Internal assembly lines (dark green).
    pub fn internal() -> Self {
        Self {
            stroke: "#006633",
            fill: "none",
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_linecap: "butt",
            stroke_linejoin: "miter",
        }
    }

    /// Let the drawn line width preview the cut: use the kerf as the
    /// stroke width, keeping the hairline for a zero kerf.
    pub fn with_kerf_width(mut self, kerf: f64) -> Self {
        if kerf > 0.0 {
            self.stroke_width = kerf;
        }
        self
    }

    /// CSS fragment for a `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "stroke:{};fill:{};stroke-width:{};stroke-linecap:{};stroke-linejoin:{}",
            self.stroke, self.fill, self.stroke_width, self.stroke_linecap, self.stroke_linejoin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes() {
        assert_eq!(LineStyle::external().stroke, "#660066");
        assert_eq!(LineStyle::internal().stroke, "#006633");
        assert_eq!(LineStyle::external().stroke_width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_kerf_width() {
        let style = LineStyle::external().with_kerf_width(0.25);
        assert_eq!(style.stroke_width, 0.25);
        let style = LineStyle::external().with_kerf_width(0.0);
        assert_eq!(style.stroke_width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_css() {
        assert_eq!(
            LineStyle::external().to_css(),
            "stroke:#660066;fill:none;stroke-width:0.1;stroke-linecap:butt;stroke-linejoin:miter"
        );
    }
}
