//! Property-based invariant tests for panel generation.
//!
//! These must hold for any spec the resolver and planner accept:
//!
//! 1. Every panel outline closes (zero net displacement).
//! 2. Every edge spans its nominal length, so opposing panels mate.
//! 3. Generation is deterministic.
//! 4. Panel extents never exceed the face size plus tab flanges.

use boxcut_designer::{panel_outline, plan, BoxOptions, DimpleStyle, PanelRole};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn arb_options() -> impl Strategy<Value = BoxOptions> {
    let dims = (
        20.0f64..200.0,
        20.0f64..200.0,
        20.0f64..200.0,
        1.5f64..6.0,
        0.0f64..0.5,
    );
    let tabs = (1u32..6, 1u32..6, 1u32..6);
    let flags = (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    );
    (dims, tabs, flags).prop_map(
        |(
            (width, length, height, thickness, kerf),
            (tabs_width, tabs_length, tabs_height),
            (with_lid, corners, half_tabs, dimples, triangular, force_separation),
        )| BoxOptions {
            width,
            length,
            height,
            thickness,
            kerf,
            tabs_width,
            tabs_length,
            tabs_height,
            with_lid,
            corners,
            half_tabs,
            dimples,
            dimple_style: if triangular {
                DimpleStyle::Triangular
            } else {
                DimpleStyle::Rounded
            },
            force_separation,
            ..BoxOptions::default()
        },
    )
}

proptest! {
    #[test]
    fn every_accepted_spec_yields_closed_panels(options in arb_options()) {
        let Ok(spec) = options.resolve() else { return Ok(()) };
        let Ok(layout) = plan(&spec) else { return Ok(()) };
        for placed in &layout.panels {
            let (x, y) = placed.path.net_displacement();
            prop_assert!(
                x.abs() < EPS && y.abs() < EPS,
                "{:?} net displacement ({}, {})", placed.role, x, y
            );
        }
    }

    #[test]
    fn generation_is_deterministic(options in arb_options()) {
        let Ok(spec) = options.resolve() else { return Ok(()) };
        let Ok(a) = plan(&spec) else { return Ok(()) };
        let b = plan(&spec).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn panel_extents_stay_within_face_plus_flanges(options in arb_options()) {
        let Ok(spec) = options.resolve() else { return Ok(()) };
        if plan(&spec).is_err() { return Ok(()) }
        let t = spec.thickness;
        for role in PanelRole::ALL {
            let (min_x, min_y, max_x, max_y) = panel_outline(&spec, role).bounds();
            let (face_w, face_h) = match role {
                PanelRole::Top | PanelRole::Bottom => (spec.width, spec.length),
                PanelRole::Back | PanelRole::Front => (spec.width, spec.height),
                PanelRole::Left | PanelRole::Right => (spec.height, spec.length),
            };
            prop_assert!(max_x - min_x <= face_w + 2.0 * t + EPS, "{:?} too wide", role);
            prop_assert!(max_y - min_y <= face_h + 2.0 * t + EPS, "{:?} too tall", role);
        }
    }

    #[test]
    fn lid_edges_span_nominal_lengths(options in arb_options()) {
        let Ok(spec) = options.resolve() else { return Ok(()) };
        if plan(&spec).is_err() { return Ok(()) }
        // With a lid, the lid's bounding box is exactly the face plus
        // one flange on each side: the tabs reach out one thickness.
        if spec.with_lid {
            let (min_x, min_y, max_x, max_y) = panel_outline(&spec, PanelRole::Top).bounds();
            prop_assert!((max_x - min_x - (spec.width + 2.0 * spec.thickness)).abs() < EPS);
            prop_assert!((max_y - min_y - (spec.length + 2.0 * spec.thickness)).abs() < EPS);
        }
    }
}
