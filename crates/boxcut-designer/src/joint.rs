//! Joint segments.
//!
//! A joint is the short thickness-spanning jog where a panel edge steps
//! across the material to form one side of a tab. With a positive kerf
//! it can carry a dimple, a small bump that presses into the mating slot
//! for a snap fit. The joint also fixes the gap-offset quadruple the
//! surrounding edge segments must use so the whole edge still sums to
//! its nominal length.

use serde::{Deserialize, Serialize};

use crate::params::{BoxSpec, DimpleStyle};
use crate::path::PathCommand;

/// Axis a joint jog runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Kerf-play corrections for the segments around a joint.
///
/// A pure function of the spec and the dimple request; never carried as
/// shared state between panels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GapOffsets {
    pub o0: f64,
    pub o1: f64,
    pub o2: f64,
    pub o3: f64,
}

impl GapOffsets {
    /// Plain regime: (gap, 2*gap, gap, 2*gap). Tabs are widened by the
    /// kerf play on both flanks.
    pub fn plain(gap: f64) -> Self {
        Self {
            o0: gap,
            o1: 2.0 * gap,
            o2: gap,
            o3: 2.0 * gap,
        }
    }

    /// Dimple regime: (0, gap, 2*gap, 3*gap). The bump takes over part
    /// of the play, so the corrections shift by one step.
    pub fn dimpled(gap: f64) -> Self {
        Self {
            o0: 0.0,
            o1: gap,
            o2: 2.0 * gap,
            o3: 3.0 * gap,
        }
    }

    /// Offsets in force for one joint of this spec.
    pub fn for_joint(spec: &BoxSpec, want_dimple: bool) -> Self {
        if want_dimple && spec.kerf > 0.0 {
            Self::dimpled(spec.gap)
        } else {
            Self::plain(spec.gap)
        }
    }
}

/// One generated joint: the commands to emit plus the offsets the
/// caller's surrounding segments must apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub commands: Vec<PathCommand>,
    pub offsets: GapOffsets,
}

/// Dimple bump radius and the straight run on each side of it.
///
/// The radius is the kerf, clamped so the bump still fits inside the
/// material: when `thickness - 2*kerf < 0.2` the radius collapses to
/// `(thickness - 0.2) / 2` with a fixed 0.1 run left on each flank.
pub fn dimple_dimensions(spec: &BoxSpec) -> (f64, f64) {
    let mut radius = spec.kerf;
    let mut short = spec.thickness / 2.0 - radius;
    if spec.thickness - 2.0 * radius < 0.2 {
        radius = (spec.thickness - 0.2) / 2.0;
        short = 0.1;
    }
    (radius, short)
}

/// Generate the joint jog spanning one material thickness.
///
/// `direction` is +1 or -1 along `axis`. Without a dimple (or with zero
/// kerf) the jog is a single straight thickness line. With one, the jog
/// splits into two short runs around a triangular or half-round bump.
/// On the vertical axis the bump's handedness follows the direction of
/// travel so opposing tabs still interlock; on the horizontal axis it
/// always bulges toward +y.
pub fn generate_joint(spec: &BoxSpec, want_dimple: bool, axis: Axis, direction: f64) -> Joint {
    let offsets = GapOffsets::for_joint(spec, want_dimple);

    if !(want_dimple && spec.kerf > 0.0) {
        let command = match axis {
            Axis::Vertical => PathCommand::VLine {
                dy: direction * spec.thickness,
            },
            Axis::Horizontal => PathCommand::HLine {
                dx: direction * spec.thickness,
            },
        };
        return Joint {
            commands: vec![command],
            offsets,
        };
    }

    let (radius, short) = dimple_dimensions(spec);
    let mut commands = Vec::with_capacity(4);
    match axis {
        Axis::Vertical => {
            commands.push(PathCommand::VLine {
                dy: direction * short,
            });
            if direction > 0.0 {
                match spec.dimple_style {
                    DimpleStyle::Triangular => {
                        commands.push(PathCommand::Line {
                            dx: radius,
                            dy: direction * radius,
                        });
                        commands.push(PathCommand::Line {
                            dx: -radius,
                            dy: direction * radius,
                        });
                    }
                    DimpleStyle::Rounded => {
                        commands.push(PathCommand::Curve {
                            c1x: radius,
                            c1y: 0.0,
                            c2x: radius,
                            c2y: direction * 2.0 * radius,
                            dx: 0.0,
                            dy: direction * 2.0 * radius,
                        });
                    }
                }
            } else {
                match spec.dimple_style {
                    DimpleStyle::Triangular => {
                        commands.push(PathCommand::Line {
                            dx: -radius,
                            dy: direction * radius,
                        });
                        commands.push(PathCommand::Line {
                            dx: radius,
                            dy: direction * radius,
                        });
                    }
                    DimpleStyle::Rounded => {
                        commands.push(PathCommand::Curve {
                            c1x: -radius,
                            c1y: 0.0,
                            c2x: -radius,
                            c2y: direction * 2.0 * radius,
                            dx: 0.0,
                            dy: direction * 2.0 * radius,
                        });
                    }
                }
            }
            commands.push(PathCommand::VLine {
                dy: direction * short,
            });
        }
        Axis::Horizontal => {
            commands.push(PathCommand::HLine {
                dx: direction * short,
            });
            match spec.dimple_style {
                DimpleStyle::Triangular => {
                    commands.push(PathCommand::Line {
                        dx: direction * radius,
                        dy: radius,
                    });
                    commands.push(PathCommand::Line {
                        dx: direction * radius,
                        dy: -radius,
                    });
                }
                DimpleStyle::Rounded => {
                    commands.push(PathCommand::Curve {
                        c1x: 0.0,
                        c1y: radius,
                        c2x: direction * 2.0 * radius,
                        c2y: radius,
                        dx: direction * 2.0 * radius,
                        dy: 0.0,
                    });
                }
            }
            commands.push(PathCommand::HLine {
                dx: direction * short,
            });
        }
    }

    Joint { commands, offsets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BoxOptions;

    fn spec_with(kerf: f64, dimples: bool, style: DimpleStyle) -> BoxSpec {
        let options = BoxOptions {
            kerf,
            dimples,
            dimple_style: style,
            ..BoxOptions::default()
        };
        options.resolve().unwrap()
    }

    fn span(joint: &Joint) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        for cmd in &joint.commands {
            let (dx, dy) = cmd.delta();
            x += dx;
            y += dy;
        }
        (x, y)
    }

    #[test]
    fn test_plain_joint_is_one_thickness_line() {
        let spec = spec_with(0.2, false, DimpleStyle::Rounded);
        let joint = generate_joint(&spec, false, Axis::Vertical, -1.0);
        assert_eq!(
            joint.commands,
            vec![PathCommand::VLine {
                dy: -spec.thickness
            }]
        );
        assert_eq!(joint.offsets, GapOffsets::plain(spec.gap));
    }

    #[test]
    fn test_dimple_requires_positive_kerf() {
        let spec = spec_with(0.0, true, DimpleStyle::Rounded);
        let joint = generate_joint(&spec, true, Axis::Horizontal, 1.0);
        assert_eq!(joint.commands.len(), 1);
        assert_eq!(joint.offsets, GapOffsets::plain(0.0));
    }

    #[test]
    fn test_dimpled_joint_spans_exactly_one_thickness() {
        let spec = spec_with(0.2, true, DimpleStyle::Rounded);
        for axis in [Axis::Vertical, Axis::Horizontal] {
            for dir in [1.0, -1.0] {
                let joint = generate_joint(&spec, true, axis, dir);
                let (x, y) = span(&joint);
                match axis {
                    Axis::Vertical => {
                        assert!((y - dir * spec.thickness).abs() < 1e-12);
                        assert!(x.abs() < 1e-12);
                    }
                    Axis::Horizontal => {
                        assert!((x - dir * spec.thickness).abs() < 1e-12);
                        assert!(y.abs() < 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn test_vertical_bump_flips_with_direction() {
        let spec = spec_with(0.2, true, DimpleStyle::Triangular);
        let up = generate_joint(&spec, true, Axis::Vertical, 1.0);
        let down = generate_joint(&spec, true, Axis::Vertical, -1.0);
        let bump_x = |j: &Joint| match j.commands[1] {
            PathCommand::Line { dx, .. } => dx,
            _ => panic!("expected a line"),
        };
        assert!(bump_x(&up) > 0.0);
        assert!(bump_x(&down) < 0.0);
    }

    #[test]
    fn test_horizontal_bump_always_bulges_same_way() {
        let spec = spec_with(0.2, true, DimpleStyle::Triangular);
        let right = generate_joint(&spec, true, Axis::Horizontal, 1.0);
        let left = generate_joint(&spec, true, Axis::Horizontal, -1.0);
        let bump_y = |j: &Joint| match j.commands[1] {
            PathCommand::Line { dy, .. } => dy,
            _ => panic!("expected a line"),
        };
        assert!(bump_y(&right) > 0.0);
        assert!(bump_y(&left) > 0.0);
    }

    #[test]
    fn test_dimple_radius_clamped_to_material() {
        // thickness = 2.1 * kerf + 0.05 forces the clamp
        let options = BoxOptions {
            kerf: 1.0,
            thickness: 2.15,
            dimples: true,
            ..BoxOptions::default()
        };
        let spec = options.resolve().unwrap();
        let (radius, short) = dimple_dimensions(&spec);
        assert!((radius - (spec.thickness - 0.2) / 2.0).abs() < 1e-12);
        assert!((short - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_dimple_radius_unclamped() {
        let spec = spec_with(0.2, true, DimpleStyle::Rounded);
        let (radius, short) = dimple_dimensions(&spec);
        assert_eq!(radius, 0.2);
        assert!((short - (spec.thickness / 2.0 - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_offset_regimes() {
        let plain = GapOffsets::plain(0.25);
        assert_eq!(plain, GapOffsets { o0: 0.25, o1: 0.5, o2: 0.25, o3: 0.5 });

        let dimpled = GapOffsets::dimpled(0.25);
        assert_eq!(dimpled, GapOffsets { o0: 0.0, o1: 0.25, o2: 0.5, o3: 0.75 });
    }
}
