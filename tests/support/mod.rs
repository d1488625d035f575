//! Test support library
//! Provides various helper functions & utilities for tests.

use nalgebra::Point2;
use paneldraft::float_types::Real;
use paneldraft::{Contour, Layer, Panel, PanelSpec, Primitive};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn point_approx_eq(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Approximate equality of two primitives, field by field.
pub fn prim_approx_eq(a: &Primitive, b: &Primitive, eps: Real) -> bool {
    match (a, b) {
        (
            Primitive::Line { start: s1, end: e1 },
            Primitive::Line { start: s2, end: e2 },
        ) => point_approx_eq(s1, s2, eps) && point_approx_eq(e1, e2, eps),
        (
            Primitive::Arc {
                center: c1,
                radius: r1,
                start_angle: sa1,
                end_angle: ea1,
            },
            Primitive::Arc {
                center: c2,
                radius: r2,
                start_angle: sa2,
                end_angle: ea2,
            },
        ) => {
            point_approx_eq(c1, c2, eps)
                && approx_eq(*r1, *r2, eps)
                && approx_eq(*sa1, *sa2, eps)
                && approx_eq(*ea1, *ea2, eps)
        },
        (
            Primitive::Circle {
                center: c1,
                radius: r1,
            },
            Primitive::Circle {
                center: c2,
                radius: r2,
            },
        ) => point_approx_eq(c1, c2, eps) && approx_eq(*r1, *r2, eps),
        _ => false,
    }
}

/// Builds the panel from `spec` and collects the emitted drawing.
pub fn drawing(spec: PanelSpec) -> Vec<(Primitive, Layer)> {
    let panel = Panel::new(spec).expect("spec should validate");
    let mut out = Vec::new();
    panel.emit(&mut out);
    out
}

/// The primitives emitted on `layer`, in emission order.
pub fn on_layer(drawing: &[(Primitive, Layer)], layer: Layer) -> Vec<Primitive> {
    drawing
        .iter()
        .filter(|(_, l)| *l == layer)
        .map(|(p, _)| p.clone())
        .collect()
}

/// Reassembles the fascia boundary into walk order: bottom-left corner,
/// bottom edge, bottom-right corner, up the right side, top-right corner,
/// top edge back, top-left corner, then down the left side to close.
///
/// The fascia layer is emitted as the outline (corners BL, BR, TL, TR with
/// the bottom and top edges between) followed by the left side bottom to
/// top and then the right side; each rebate contributes six primitives and
/// each side run ends with one closing line.
pub fn fascia_loop(drawing: &[(Primitive, Layer)], left_mounts: usize) -> Contour {
    let fascia = on_layer(drawing, Layer::Fascia);
    let left_len = 6 * left_mounts + 1;
    let (outline, runs) = fascia.split_at(6);
    let (left_run, right_run) = runs.split_at(left_len);

    let mut contour = Contour::new();
    contour.push(outline[0].clone()); // bottom-left corner
    contour.push(outline[1].clone()); // bottom edge
    contour.push(outline[2].clone()); // bottom-right corner
    contour.extend(right_run.iter().cloned());
    contour.push(outline[5].clone()); // top-right corner
    contour.push(outline[4].clone()); // top edge
    contour.push(outline[3].clone()); // top-left corner
    contour.extend(left_run.iter().rev().cloned());
    contour
}

/// The left and right fascia side runs, in emission order (bottom to top).
pub fn fascia_runs(
    drawing: &[(Primitive, Layer)],
    left_mounts: usize,
) -> (Vec<Primitive>, Vec<Primitive>) {
    let fascia = on_layer(drawing, Layer::Fascia);
    let left_len = 6 * left_mounts + 1;
    let (_, runs) = fascia.split_at(6);
    let (left_run, right_run) = runs.split_at(left_len);
    (left_run.to_vec(), right_run.to_vec())
}

/// Mirror image of a primitive about the panel's vertical midline, with
/// arc sweeps kept counter-clockwise.
pub fn mirrored(primitive: &Primitive, width: Real) -> Primitive {
    let flip = |p: &Point2<Real>| Point2::new(width - p.x, p.y);
    match primitive {
        Primitive::Line { start, end } => Primitive::line(flip(start), flip(end)),
        Primitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => Primitive::arc(
            flip(center),
            *radius,
            (180.0 - end_angle).rem_euclid(360.0),
            (180.0 - start_angle).rem_euclid(360.0),
        ),
        Primitive::Circle { center, radius } => Primitive::circle(flip(center), *radius),
    }
}
