//! SVG output.
//!
//! Reference renderer for planned layouts: one `<g>` per box carrying
//! the whole-drawing translation, one `<path>` per panel with a unique
//! id derived from the group id. Any host with an SVG-shaped canvas can
//! stand in for this module; the geometry never depends on it.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::layout::BoxLayout;
use crate::style::LineStyle;

/// Margin around the drawing in document units.
const DOC_MARGIN: f64 = 5.0;

/// An SVG document under construction. Hands out unique element ids
/// the way a host canvas would.
#[derive(Debug, Default)]
pub struct SvgDocument {
    elements: Vec<String>,
    id_counts: HashMap<String, u32>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint an id unique within this document: `box`, `box2`, `box3`...
    pub fn unique_id(&mut self, prefix: &str) -> String {
        let count = self.id_counts.entry(prefix.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            prefix.to_string()
        } else {
            format!("{}{}", prefix, count)
        }
    }

    /// Open a group with a translation transform. Children added until
    /// [`SvgDocument::close_group`] nest inside it.
    pub fn open_group(&mut self, id: &str, translate: (f64, f64)) {
        self.elements.push(format!(
            "<g id=\"{}\" transform=\"translate({},{})\">",
            id, translate.0, translate.1
        ));
    }

    pub fn close_group(&mut self) {
        self.elements.push("</g>".to_string());
    }

    /// Insert a path element and return its id.
    pub fn add_path(&mut self, id: String, d: &str, style: &LineStyle) -> String {
        self.elements.push(format!(
            "<path id=\"{}\" style=\"{}\" d=\"{}\"/>",
            id,
            style.to_css(),
            d
        ));
        id
    }

    /// Finish the document with the given canvas size.
    pub fn finish(self, width: f64, height: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">",
            w = width,
            h = height
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {}", element);
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Render a planned layout as a complete SVG document.
pub fn render(layout: &BoxLayout, style: &LineStyle) -> String {
    let mut doc = SvgDocument::new();
    let box_id = doc.unique_id("box");
    doc.open_group(&box_id, layout.translation);
    for panel in &layout.panels {
        let d = panel.path.to_svg_d(panel.offset.0, panel.offset.1);
        doc.add_path(format!("{}-{}", box_id, panel.role.id_suffix()), &d, style);
    }
    doc.close_group();

    let (_, _, max_x, max_y) = layout.bounds();
    doc.finish(max_x + DOC_MARGIN, max_y + DOC_MARGIN)
}
