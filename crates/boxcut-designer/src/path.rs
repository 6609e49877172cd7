//! Path commands and panel paths.
//!
//! A panel outline is an ordered list of mostly relative commands, the
//! same vocabulary the generators emit and the SVG writer serializes:
//! one absolute anchor move, then relative moves, axis lines, free lines
//! and cubic curves. Relative moves carry displacement without cutting,
//! which is how coincident edges are elided in packed layouts.

use serde::{Deserialize, Serialize};

/// A single path command. All variants except [`PathCommand::MoveTo`]
/// are relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCommand {
    /// Absolute move. Only ever the first command of a panel.
    MoveTo { x: f64, y: f64 },
    /// Relative move (no cut).
    MoveBy { dx: f64, dy: f64 },
    /// Relative horizontal line.
    HLine { dx: f64 },
    /// Relative vertical line.
    VLine { dy: f64 },
    /// Relative line.
    Line { dx: f64, dy: f64 },
    /// Relative cubic curve; control points and endpoint all relative
    /// to the segment start.
    Curve {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        dx: f64,
        dy: f64,
    },
}

impl PathCommand {
    /// Displacement contributed to the current point. The absolute
    /// anchor contributes nothing; it sets the origin.
    pub fn delta(&self) -> (f64, f64) {
        match *self {
            PathCommand::MoveTo { .. } => (0.0, 0.0),
            PathCommand::MoveBy { dx, dy } => (dx, dy),
            PathCommand::HLine { dx } => (dx, 0.0),
            PathCommand::VLine { dy } => (0.0, dy),
            PathCommand::Line { dx, dy } => (dx, dy),
            PathCommand::Curve { dx, dy, .. } => (dx, dy),
        }
    }

    /// Whether the command cuts material.
    pub fn is_drawn(&self) -> bool {
        !matches!(
            self,
            PathCommand::MoveTo { .. } | PathCommand::MoveBy { .. }
        )
    }

    /// Cut length of this command, taxicab. Exact for axis-aligned
    /// segments, which is all the generators emit outside dimple bumps.
    pub fn drawn_length(&self) -> f64 {
        if !self.is_drawn() {
            return 0.0;
        }
        let (dx, dy) = self.delta();
        dx.abs() + dy.abs()
    }
}

/// One panel outline: an anchor move followed by relative commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelPath {
    pub commands: Vec<PathCommand>,
}

impl PanelPath {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Sum of all relative displacements. Zero for a closed outline.
    pub fn net_displacement(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        for cmd in &self.commands {
            let (dx, dy) = cmd.delta();
            x += dx;
            y += dy;
        }
        (x, y)
    }

    /// Whether the path returns to its anchor within `epsilon`.
    pub fn is_closed(&self, epsilon: f64) -> bool {
        let (x, y) = self.net_displacement();
        x.abs() <= epsilon && y.abs() <= epsilon
    }

    /// Total cut length.
    pub fn drawn_length(&self) -> f64 {
        self.commands.iter().map(PathCommand::drawn_length).sum()
    }

    /// Axis-aligned bounding box of every point the path visits,
    /// moves included, as (min_x, min_y, max_x, max_y).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        let mut track = |x: f64, y: f64| {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        };
        for cmd in &self.commands {
            if let PathCommand::MoveTo { x: ax, y: ay } = *cmd {
                x = ax;
                y = ay;
            } else {
                let (dx, dy) = cmd.delta();
                x += dx;
                y += dy;
            }
            track(x, y);
        }
        if self.commands.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Serialize to an SVG `d` attribute, shifted by `(ox, oy)`.
    ///
    /// Only the anchor is absolute, so placement is a constant offset
    /// on the first command.
    pub fn to_svg_d(&self, ox: f64, oy: f64) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo { x, y } => {
                    d.push_str(&format!("M {} {}", fmt_num(x + ox), fmt_num(y + oy)));
                }
                PathCommand::MoveBy { dx, dy } => {
                    d.push_str(&format!("m {} {}", fmt_num(dx), fmt_num(dy)));
                }
                PathCommand::HLine { dx } => {
                    d.push_str(&format!("h {}", fmt_num(dx)));
                }
                PathCommand::VLine { dy } => {
                    d.push_str(&format!("v {}", fmt_num(dy)));
                }
                PathCommand::Line { dx, dy } => {
                    d.push_str(&format!("l {} {}", fmt_num(dx), fmt_num(dy)));
                }
                PathCommand::Curve {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    dx,
                    dy,
                } => {
                    d.push_str(&format!(
                        "c {} {} {} {} {} {}",
                        fmt_num(c1x),
                        fmt_num(c1y),
                        fmt_num(c2x),
                        fmt_num(c2y),
                        fmt_num(dx),
                        fmt_num(dy)
                    ));
                }
            }
        }
        d
    }
}

/// Format a coordinate with enough precision for cutting, without
/// trailing zero noise.
fn fmt_num(v: f64) -> String {
    // -0.0 prints as "-0" otherwise
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
