//! Panel outline generation.
//!
//! Three walkers cover the six faces: the lid/base pair, the two short
//! sides and the two long sides. Each edge is a row of tabs produced by
//! one parameterized routine; the per-face differences (travel
//! direction, tab or slot flank, joint handedness, offset pair) are
//! plain data. Faces are identified by [`PanelRole`], never by name
//! matching.
//!
//! All outlines are anchored at a local origin; the layout planner
//! supplies placement. Every outline closes exactly: the sum of its
//! relative displacements is zero, with elided edges contributing their
//! displacement through relative moves.

use serde::{Deserialize, Serialize};

use crate::joint::{generate_joint, Axis};
use crate::params::BoxSpec;
use crate::path::{PanelPath, PathCommand};

/// The six faces of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelRole {
    /// The lid. Without a lid this face is cut as a plain cover blank.
    Top,
    /// The base.
    Bottom,
    /// Short side behind the lid; its top edge opens up with no lid.
    Back,
    /// Short side in front; its bottom edge opens up with no lid.
    Front,
    /// First long side.
    Left,
    /// Second long side.
    Right,
}

impl PanelRole {
    pub const ALL: [PanelRole; 6] = [
        PanelRole::Top,
        PanelRole::Back,
        PanelRole::Bottom,
        PanelRole::Front,
        PanelRole::Left,
        PanelRole::Right,
    ];

    /// Shape id suffix in rendered output.
    pub fn id_suffix(self) -> &'static str {
        match self {
            PanelRole::Top => "lid",
            PanelRole::Bottom => "base",
            PanelRole::Back => "back",
            PanelRole::Front => "front",
            PanelRole::Left => "left",
            PanelRole::Right => "right",
        }
    }
}

/// One row of tabs along a panel edge.
///
/// A row is `tabs` repetitions of quarter-run, joint, half-run,
/// thickness jog, quarter-run, with optional half-tab lead runs at both
/// ends. `widen` picks which flank of the fit the row sits on: widened
/// rows subtract the gap corrections (tab side), narrowed rows add them
/// (slot side). The correction adjacent to the joint comes from the
/// joint's offset quadruple so the row length stays exact.
struct TabRow {
    /// Axis the row runs along.
    travel: Axis,
    /// Travel sign, +1 or -1.
    dir: f64,
    /// Nominal edge length.
    edge: f64,
    /// Tab count, fractional when half tabs are off.
    tabs: f64,
    /// Joint jog sign along the perpendicular axis.
    joint_dir: f64,
    /// Plain thickness jog sign along the perpendicular axis.
    plain_dir: f64,
    /// Joint before the plain jog, or after.
    joint_first: bool,
    /// Tab flank (subtract corrections) vs slot flank (add them).
    widen: bool,
    /// Use the (o2, o3) offsets instead of (o0, o1).
    high_offsets: bool,
}

fn axis_step(axis: Axis, d: f64) -> PathCommand {
    match axis {
        Axis::Horizontal => PathCommand::HLine { dx: d },
        Axis::Vertical => PathCommand::VLine { dy: d },
    }
}

fn tab_row(commands: &mut Vec<PathCommand>, spec: &BoxSpec, row: TabRow) {
    let unit = row.edge / row.tabs;
    let quarter = unit / 4.0;
    let half = unit / 2.0;
    let s = if row.widen { -1.0 } else { 1.0 };
    let perp = row.travel.perpendicular();

    if !spec.half_tabs {
        commands.push(axis_step(row.travel, row.dir * quarter));
    }
    for _ in 0..row.tabs as usize {
        let joint = generate_joint(spec, spec.dimples, perp, row.joint_dir);
        let (near, far) = if row.high_offsets {
            (joint.offsets.o2, joint.offsets.o3)
        } else {
            (joint.offsets.o0, joint.offsets.o1)
        };
        if row.joint_first {
            commands.push(axis_step(row.travel, row.dir * (quarter + s * near)));
            commands.extend(joint.commands);
            commands.push(axis_step(row.travel, row.dir * (half - s * far)));
            commands.push(axis_step(perp, row.plain_dir * spec.thickness));
            commands.push(axis_step(row.travel, row.dir * (quarter + s * spec.gap)));
        } else {
            commands.push(axis_step(row.travel, row.dir * (quarter + s * spec.gap)));
            commands.push(axis_step(perp, row.plain_dir * spec.thickness));
            commands.push(axis_step(row.travel, row.dir * (half - s * far)));
            commands.extend(joint.commands);
            commands.push(axis_step(row.travel, row.dir * (quarter + s * near)));
        }
    }
    if !spec.half_tabs {
        commands.push(axis_step(row.travel, row.dir * quarter));
    }
}

/// Generate the outline of one face.
pub fn panel_outline(spec: &BoxSpec, role: PanelRole) -> PanelPath {
    match role {
        PanelRole::Top | PanelRole::Bottom => top_bottom(spec, role),
        PanelRole::Back | PanelRole::Front => short_side(spec, role),
        PanelRole::Left | PanelRole::Right => long_side(spec, role),
    }
}

/// Lid and base. Tabs on all four edges slot into the sides. The base
/// shares its top edge with the back panel in packed layouts; an open
/// box replaces the lid with a plain cover blank.
fn top_bottom(spec: &BoxSpec, role: PanelRole) -> PanelPath {
    let t = spec.thickness;
    let w = spec.width;
    let l = spec.length;
    let mut commands = Vec::new();

    if role == PanelRole::Top && !spec.with_lid {
        // Open box: a plain blank covering the full footprint.
        commands.push(PathCommand::MoveTo { x: -t, y: -t });
        commands.push(PathCommand::HLine { dx: w + 2.0 * t });
        commands.push(PathCommand::VLine { dy: l + 2.0 * t });
        commands.push(PathCommand::HLine { dx: -(w + 2.0 * t) });
        commands.push(PathCommand::VLine { dy: -(l + 2.0 * t) });
        return PanelPath { commands };
    }

    commands.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });

    // Top edge. The base's is coincident with the back panel when
    // packed, so it is skipped there.
    if role == PanelRole::Bottom && !spec.separated() {
        commands.push(PathCommand::MoveBy { dx: w, dy: 0.0 });
    } else {
        tab_row(
            &mut commands,
            spec,
            TabRow {
                travel: Axis::Horizontal,
                dir: 1.0,
                edge: w,
                tabs: spec.tabs_width,
                joint_dir: -1.0,
                plain_dir: 1.0,
                joint_first: true,
                widen: true,
                high_offsets: false,
            },
        );
    }

    // Right edge, downward.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Vertical,
            dir: 1.0,
            edge: l,
            tabs: spec.tabs_length,
            joint_dir: -1.0,
            plain_dir: 1.0,
            joint_first: false,
            widen: true,
            high_offsets: false,
        },
    );

    // Bottom edge, leftward.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Horizontal,
            dir: -1.0,
            edge: w,
            tabs: spec.tabs_width,
            joint_dir: -1.0,
            plain_dir: 1.0,
            joint_first: false,
            widen: true,
            high_offsets: false,
        },
    );

    // Left edge, back up.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Vertical,
            dir: -1.0,
            edge: l,
            tabs: spec.tabs_length,
            joint_dir: -1.0,
            plain_dir: 1.0,
            joint_first: true,
            widen: true,
            high_offsets: false,
        },
    );

    PanelPath { commands }
}

/// Back and front. Slot flanks all around, optional corner cubes, and
/// one edge that opens up when the box has no lid.
fn short_side(spec: &BoxSpec, role: PanelRole) -> PanelPath {
    let t = spec.thickness;
    let w = spec.width;
    let h = spec.height;
    let mut commands = Vec::new();

    if spec.corners {
        commands.push(PathCommand::MoveTo { x: -t, y: 0.0 });
        commands.push(PathCommand::VLine { dy: -t });
        commands.push(PathCommand::HLine { dx: t });
    } else {
        commands.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });
        commands.push(PathCommand::VLine { dy: -t });
    }

    // Top edge. Open (no tabs) on the back of a lidless box, and
    // coincident with the lid when packed.
    let top_span = if spec.corners { w + t } else { w };
    if role == PanelRole::Back && !spec.with_lid {
        if spec.separated() {
            commands.push(PathCommand::HLine { dx: top_span });
        } else {
            commands.push(PathCommand::MoveBy {
                dx: top_span,
                dy: 0.0,
            });
        }
    } else if spec.separated() {
        tab_row(
            &mut commands,
            spec,
            TabRow {
                travel: Axis::Horizontal,
                dir: 1.0,
                edge: w,
                tabs: spec.tabs_width,
                joint_dir: -1.0,
                plain_dir: 1.0,
                joint_first: false,
                widen: false,
                high_offsets: false,
            },
        );
        if spec.corners {
            commands.push(PathCommand::HLine { dx: t });
        }
    } else {
        commands.push(PathCommand::MoveBy {
            dx: top_span,
            dy: 0.0,
        });
    }

    commands.push(PathCommand::VLine { dy: t });
    if !spec.corners {
        commands.push(PathCommand::HLine { dx: t });
    }

    // Right edge, downward.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Vertical,
            dir: 1.0,
            edge: h,
            tabs: spec.tabs_height,
            joint_dir: -1.0,
            plain_dir: 1.0,
            joint_first: true,
            widen: false,
            high_offsets: false,
        },
    );

    if spec.corners {
        commands.push(PathCommand::VLine { dy: t });
        commands.push(PathCommand::HLine { dx: -t });
    } else {
        commands.push(PathCommand::HLine { dx: -t });
        commands.push(PathCommand::VLine { dy: t });
    }

    // Bottom edge, leftward. Open on the front of a lidless box.
    if role == PanelRole::Front && !spec.with_lid {
        commands.push(PathCommand::HLine { dx: -w });
    } else {
        tab_row(
            &mut commands,
            spec,
            TabRow {
                travel: Axis::Horizontal,
                dir: -1.0,
                edge: w,
                tabs: spec.tabs_width,
                joint_dir: -1.0,
                plain_dir: 1.0,
                joint_first: true,
                widen: false,
                high_offsets: false,
            },
        );
    }

    if spec.corners {
        commands.push(PathCommand::HLine { dx: -t });
        commands.push(PathCommand::VLine { dy: -t });
    } else {
        commands.push(PathCommand::VLine { dy: -t });
        commands.push(PathCommand::HLine { dx: -t });
    }

    // Left edge, back up.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Vertical,
            dir: -1.0,
            edge: h,
            tabs: spec.tabs_height,
            joint_dir: -1.0,
            plain_dir: 1.0,
            joint_first: false,
            widen: false,
            high_offsets: false,
        },
    );

    if !spec.corners {
        commands.push(PathCommand::HLine { dx: t });
    }

    PanelPath { commands }
}

/// The two long sides. Tab flanks along the height edges (with the
/// upward joint handedness so the bumps interlock with the short
/// sides), slot flanks along the length edges. The left length edge is
/// elided when packed; the right one opens up on a lidless box's
/// second side.
fn long_side(spec: &BoxSpec, role: PanelRole) -> PanelPath {
    let t = spec.thickness;
    let h = spec.height;
    let l = spec.length;
    let length_unit = l / spec.tabs_length;
    let mut commands = Vec::new();

    commands.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });
    commands.push(PathCommand::HLine { dx: t });

    // Top edge over the height, tabs jogging upward.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Horizontal,
            dir: 1.0,
            edge: h,
            tabs: spec.tabs_height,
            joint_dir: 1.0,
            plain_dir: -1.0,
            joint_first: false,
            widen: true,
            high_offsets: false,
        },
    );
    commands.push(PathCommand::HLine { dx: t });

    // Right edge, downward. On a lidless box the second long side
    // meets the open top, so this edge is a straight drop.
    if role == PanelRole::Right && !spec.with_lid {
        if spec.half_tabs {
            commands.push(PathCommand::VLine { dy: l });
        } else {
            commands.push(PathCommand::VLine {
                dy: length_unit / 4.0,
            });
            commands.push(PathCommand::VLine {
                dy: l - length_unit / 4.0,
            });
        }
        commands.push(PathCommand::HLine { dx: -t });
    } else {
        tab_row(
            &mut commands,
            spec,
            TabRow {
                travel: Axis::Vertical,
                dir: 1.0,
                edge: l,
                tabs: spec.tabs_length,
                joint_dir: -1.0,
                plain_dir: 1.0,
                joint_first: true,
                widen: false,
                high_offsets: false,
            },
        );
        commands.push(PathCommand::HLine { dx: -t });
    }

    // Bottom edge, leftward. Same upward joints as the top edge but
    // with the high offset pair keeping the play symmetric.
    tab_row(
        &mut commands,
        spec,
        TabRow {
            travel: Axis::Horizontal,
            dir: -1.0,
            edge: h,
            tabs: spec.tabs_height,
            joint_dir: 1.0,
            plain_dir: -1.0,
            joint_first: true,
            widen: false,
            high_offsets: true,
        },
    );
    commands.push(PathCommand::HLine { dx: -t });

    // Left edge, back up. Tabs when the panels stand apart, a straight
    // line when this side closes an open top, elided when packed.
    if spec.separated() && (spec.with_lid || role == PanelRole::Right) {
        tab_row(
            &mut commands,
            spec,
            TabRow {
                travel: Axis::Vertical,
                dir: -1.0,
                edge: l,
                tabs: spec.tabs_length,
                joint_dir: -1.0,
                plain_dir: 1.0,
                joint_first: false,
                widen: false,
                high_offsets: false,
            },
        );
    } else if spec.separated() {
        commands.push(PathCommand::VLine { dy: -l });
    } else {
        commands.push(PathCommand::MoveBy { dx: 0.0, dy: -l });
    }

    PanelPath { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BoxOptions;

    const EPS: f64 = 1e-9;

    fn spec(options: BoxOptions) -> BoxSpec {
        options.resolve().unwrap()
    }

    fn edge_sum(commands: &[PathCommand], travel: Axis) -> f64 {
        commands
            .iter()
            .map(|c| {
                let (dx, dy) = c.delta();
                match travel {
                    Axis::Horizontal => dx,
                    Axis::Vertical => dy,
                }
            })
            .sum()
    }

    #[test]
    fn test_tab_row_spans_nominal_edge_in_every_regime() {
        for dimples in [false, true] {
            for half_tabs in [true, false] {
                for widen in [true, false] {
                    for high_offsets in [false, true] {
                        let s = spec(BoxOptions {
                            kerf: 0.2,
                            dimples,
                            half_tabs,
                            ..BoxOptions::default()
                        });
                        let mut commands = Vec::new();
                        tab_row(
                            &mut commands,
                            &s,
                            TabRow {
                                travel: Axis::Horizontal,
                                dir: 1.0,
                                edge: s.width,
                                tabs: s.tabs_width,
                                joint_dir: -1.0,
                                plain_dir: 1.0,
                                joint_first: widen,
                                widen,
                                high_offsets,
                            },
                        );
                        let along = edge_sum(&commands, Axis::Horizontal);
                        assert!(
                            (along - s.width).abs() < EPS,
                            "row spans {along} instead of {} (dimples={dimples} half={half_tabs} widen={widen} high={high_offsets})",
                            s.width
                        );
                        // joint and plain jogs cancel across the row
                        assert!(edge_sum(&commands, Axis::Vertical).abs() < EPS);
                    }
                }
            }
        }
    }

    #[test]
    fn test_all_panels_close_in_every_mode() {
        for kerf in [0.0, 0.2] {
            for with_lid in [true, false] {
                for corners in [true, false] {
                    for half_tabs in [true, false] {
                        for dimples in [false, true] {
                            for force_separation in [false, true] {
                                let s = spec(BoxOptions {
                                    kerf,
                                    with_lid,
                                    corners,
                                    half_tabs,
                                    dimples,
                                    force_separation,
                                    ..BoxOptions::default()
                                });
                                for role in PanelRole::ALL {
                                    let path = panel_outline(&s, role);
                                    let (x, y) = path.net_displacement();
                                    assert!(
                                        x.abs() < EPS && y.abs() < EPS,
                                        "{role:?} not closed: ({x}, {y}) kerf={kerf} lid={with_lid} corners={corners} half={half_tabs} dimples={dimples} sep={force_separation}"
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_lid_drawn_length_matches_nominal_outline() {
        // Tabs only add thickness jogs: each of the 2*(3+3) tabs
        // crosses the material twice.
        let s = spec(BoxOptions::default());
        let lid = panel_outline(&s, PanelRole::Top);
        let expected = 2.0 * (30.0 + 50.0) + 4.0 * 3.0 * (3.0 + 3.0);
        assert!((lid.drawn_length() - expected).abs() < EPS);
    }

    #[test]
    fn test_packed_base_elides_shared_edge() {
        let s = spec(BoxOptions::default());
        let base = panel_outline(&s, PanelRole::Bottom);
        assert_eq!(
            base.commands[1],
            PathCommand::MoveBy { dx: 30.0, dy: 0.0 }
        );
        // The lid draws the same edge with tabs.
        let lid = panel_outline(&s, PanelRole::Top);
        assert!(lid.commands.iter().all(|c| *c != PathCommand::MoveBy { dx: 30.0, dy: 0.0 }));
    }

    #[test]
    fn test_separated_base_draws_all_edges() {
        let s = spec(BoxOptions {
            force_separation: true,
            ..BoxOptions::default()
        });
        let base = panel_outline(&s, PanelRole::Bottom);
        assert!(base
            .commands
            .iter()
            .all(|c| !matches!(c, PathCommand::MoveBy { .. })));
        let lid = panel_outline(&s, PanelRole::Top);
        assert!((base.drawn_length() - lid.drawn_length()).abs() < EPS);
    }

    #[test]
    fn test_open_box_degenerates_only_the_open_edges() {
        let s = spec(BoxOptions {
            with_lid: false,
            force_separation: true,
            ..BoxOptions::default()
        });

        // Cover blank: a plain rectangle.
        let top = panel_outline(&s, PanelRole::Top);
        assert_eq!(top.commands.len(), 5);
        assert!((top.drawn_length() - 2.0 * (36.0 + 56.0)).abs() < EPS);

        // Back's top edge collapses to one straight run of the width
        // plus the corner flange.
        let back = panel_outline(&s, PanelRole::Back);
        assert_eq!(back.commands[3], PathCommand::HLine { dx: 33.0 });

        // Front's bottom edge collapses likewise (flange separate).
        let front = panel_outline(&s, PanelRole::Front);
        assert!(front
            .commands
            .iter()
            .any(|c| *c == PathCommand::HLine { dx: -30.0 }));

        // The second long side's right edge drops straight.
        let right = panel_outline(&s, PanelRole::Right);
        assert!(right
            .commands
            .iter()
            .any(|c| *c == PathCommand::VLine { dy: 50.0 }));

        // The first long side keeps its tabs everywhere but the left
        // edge, which closes with a straight run.
        let left = panel_outline(&s, PanelRole::Left);
        assert!(left
            .commands
            .iter()
            .any(|c| *c == PathCommand::VLine { dy: -50.0 }));
    }

    #[test]
    fn test_packed_long_sides_elide_left_edge() {
        let s = spec(BoxOptions::default());
        for role in [PanelRole::Left, PanelRole::Right] {
            let path = panel_outline(&s, role);
            assert_eq!(
                *path.commands.last().unwrap(),
                PathCommand::MoveBy { dx: 0.0, dy: -50.0 }
            );
        }
    }

    #[test]
    fn test_identical_specs_generate_identical_panels() {
        let options = BoxOptions {
            kerf: 0.17,
            dimples: true,
            half_tabs: false,
            ..BoxOptions::default()
        };
        let a = spec(options.clone());
        let b = spec(options);
        for role in PanelRole::ALL {
            assert_eq!(panel_outline(&a, role), panel_outline(&b, role));
        }
    }

    #[test]
    fn test_corner_cubes_grow_the_short_side() {
        let with = spec(BoxOptions {
            force_separation: true,
            ..BoxOptions::default()
        });
        let without = spec(BoxOptions {
            corners: false,
            force_separation: true,
            ..BoxOptions::default()
        });
        let (min_x, min_y, max_x, max_y) = panel_outline(&with, PanelRole::Back).bounds();
        assert!((min_x + 3.0).abs() < EPS);
        assert!((max_x - 33.0).abs() < EPS);
        let (nx, ny, mx, my) = panel_outline(&without, PanelRole::Back).bounds();
        assert!((nx + 3.0).abs() < EPS);
        assert!((mx - 33.0).abs() < EPS);
        // Corner cubes square off the outline; either way the vertical
        // extent spans the height plus both flanges.
        assert!((max_y - min_y - 26.0).abs() < EPS);
        assert!((my - ny - 26.0).abs() < EPS);
    }
}
