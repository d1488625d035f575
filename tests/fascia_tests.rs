mod support;

use nalgebra::Point2;
use paneldraft::contour::coincident;
use paneldraft::float_types::{EPSILON, to_millimeters};
use paneldraft::{Contour, Layer, PanelSpec, Primitive};

fn default_spec() -> PanelSpec {
    PanelSpec {
        width_in: 5.75,
        height_units: 9,
        left_mount: vec![1, 7],
        right_mount: vec![1, 7],
    }
}

/// `true` when `next` attaches to either endpoint of `current`.
fn chained(current: &Primitive, next: &Primitive) -> bool {
    let (a, b) = current.endpoints().unwrap();
    let (c, d) = next.endpoints().unwrap();
    coincident(&a, &c) || coincident(&a, &d) || coincident(&b, &c) || coincident(&b, &d)
}

#[test]
fn plate_outline_closes() {
    let drawing = support::drawing(default_spec());
    let lines: Vec<_> = support::on_layer(&drawing, Layer::Plate)
        .into_iter()
        .filter(|p| matches!(p, Primitive::Line { .. }))
        .collect();
    assert_eq!(lines.len(), 4);
    assert!(Contour::from(lines).check_closed().is_ok());
}

#[test]
fn fascia_contour_closes_with_rebates() {
    let drawing = support::drawing(default_spec());
    let contour = support::fascia_loop(&drawing, 2);
    // 4 corners + 2 horizontal edges + 2 sides of (2 rebates x 6 + 1).
    assert_eq!(contour.primitives.len(), 32);
    assert_eq!(contour.check_closed(), Ok(()));
}

#[test]
fn rebate_sequence_is_continuous() {
    let drawing = support::drawing(PanelSpec {
        width_in: 5.75,
        height_units: 9,
        left_mount: vec![3],
        right_mount: vec![],
    });
    let (left_run, right_run) = support::fascia_runs(&drawing, 1);
    // Lead-in, fillet, mouth, pocket wall, mouth, fillet, closing edge.
    assert_eq!(left_run.len(), 7);
    assert_eq!(right_run.len(), 1);
    for pair in left_run.windows(2) {
        assert!(chained(&pair[0], &pair[1]));
    }
}

#[test]
fn pocket_walls_wrap_the_fastener_centres() {
    let drawing = support::drawing(default_spec());
    let pocket_r = to_millimeters(3.0 / 16.0 + 1.0 / 16.0);
    let pockets: Vec<_> = support::on_layer(&drawing, Layer::Fascia)
        .into_iter()
        .filter_map(|p| match p {
            Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } if support::approx_eq(radius, pocket_r, EPSILON) => {
                Some((center, start_angle, end_angle))
            },
            _ => None,
        })
        .collect();
    assert_eq!(pockets.len(), 4);

    // Left pockets open to the right (270 -> 90 through 0), right pockets
    // to the left (90 -> 270 through 180), both half circles.
    for (center, start_angle, end_angle) in &pockets {
        let left = center.x < to_millimeters(5.75) / 2.0;
        let expected_x = if left { 4.7625 } else { 141.2875 };
        let expected_angles = if left { (270.0, 90.0) } else { (90.0, 270.0) };
        assert!(support::approx_eq(center.x, expected_x, EPSILON));
        assert!(
            support::approx_eq(center.y, 14.2875, EPSILON)
                || support::approx_eq(center.y, 71.4375, EPSILON)
        );
        assert!(support::approx_eq(*start_angle, expected_angles.0, EPSILON));
        assert!(support::approx_eq(*end_angle, expected_angles.1, EPSILON));
    }
}

#[test]
fn right_side_mirrors_left() {
    let drawing = support::drawing(default_spec());
    let width = to_millimeters(5.75);

    let (left_run, right_run) = support::fascia_runs(&drawing, 2);
    assert_eq!(left_run.len(), right_run.len());
    for (left, right) in left_run.iter().zip(&right_run) {
        assert!(
            support::prim_approx_eq(&support::mirrored(left, width), right, EPSILON),
            "mirror of {left:?} is not {right:?}"
        );
    }

    let circles: Vec<_> = support::on_layer(&drawing, Layer::Plate)
        .into_iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .collect();
    let (left_holes, right_holes) = circles.split_at(circles.len() / 2);
    for (left, right) in left_holes.iter().zip(right_holes) {
        assert!(support::prim_approx_eq(
            &support::mirrored(left, width),
            right,
            EPSILON
        ));
    }
}

#[test]
fn gaps_are_detected() {
    let mut contour = Contour::new();
    contour.push(Primitive::line(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
    ));
    contour.push(Primitive::line(
        Point2::new(5.0, 5.0),
        Point2::new(6.0, 5.0),
    ));
    let gap = contour.check_closed().unwrap_err();
    assert_eq!(gap.index, 1);
}

#[test]
fn triangle_closes() {
    let contour = Contour::from(vec![
        Primitive::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
        Primitive::line(Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)),
        Primitive::line(Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)),
    ]);
    assert_eq!(contour.check_closed(), Ok(()));
}

#[test]
fn circles_never_chain() {
    let contour = Contour::from(vec![
        Primitive::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
        Primitive::circle(Point2::new(1.0, 0.0), 1.0),
    ]);
    assert!(contour.check_closed().is_err());
}
