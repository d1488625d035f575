//! Geometric primitives and the drawing layers they are tagged with.

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt;

/// The fixed set of drawing layers.
///
/// Construction layers hold drafting references (centrelines, locating
/// lines); they are not part of any closed boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Plate,
    PlateConstruction,
    Fascia,
    FasciaConstruction,
    Decal,
    DecalConstruction,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::Plate,
        Layer::PlateConstruction,
        Layer::Fascia,
        Layer::FasciaConstruction,
        Layer::Decal,
        Layer::DecalConstruction,
    ];

    /// Layer name as drawing sinks spell it.
    pub const fn name(self) -> &'static str {
        match self {
            Layer::Plate => "plate",
            Layer::PlateConstruction => "plate_construction",
            Layer::Fascia => "fascia",
            Layer::FasciaConstruction => "fascia_construction",
            Layer::Decal => "decal",
            Layer::DecalConstruction => "decal_construction",
        }
    }

    /// `true` for the construction-line layers.
    pub const fn is_construction(self) -> bool {
        matches!(
            self,
            Layer::PlateConstruction | Layer::FasciaConstruction | Layer::DecalConstruction
        )
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One drawing entity in panel (millimeter) coordinates.
///
/// The origin is the bottom-left corner of the *plate*; the fascia sits
/// 1/32" inside it on all sides.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Straight segment from `start` to `end`.
    Line {
        start: Point2<Real>,
        end: Point2<Real>,
    },
    /// Circular arc swept counter-clockwise from `start_angle` to
    /// `end_angle`, both in degrees from the positive x-axis, wrapping
    /// through 0° when `end_angle < start_angle`.
    Arc {
        center: Point2<Real>,
        radius: Real,
        start_angle: Real,
        end_angle: Real,
    },
    /// Full circle, e.g. a drilled hole.
    Circle { center: Point2<Real>, radius: Real },
}

impl Primitive {
    pub fn line(start: Point2<Real>, end: Point2<Real>) -> Self {
        Primitive::Line { start, end }
    }

    pub fn arc(center: Point2<Real>, radius: Real, start_angle: Real, end_angle: Real) -> Self {
        Primitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn circle(center: Point2<Real>, radius: Real) -> Self {
        Primitive::Circle { center, radius }
    }

    /// Point on the circle of `radius` about `center` at `angle` degrees.
    fn at_angle(center: &Point2<Real>, radius: Real, angle: Real) -> Point2<Real> {
        let (sin, cos) = angle.to_radians().sin_cos();
        Point2::new(center.x + radius * cos, center.y + radius * sin)
    }

    /// The two endpoints of an open primitive, in parameter order: a line
    /// reports `(start, end)`, an arc the points at `start_angle` and
    /// `end_angle`. A boundary walk may traverse an arc from either angular
    /// end. Circles are closed and report `None`.
    pub fn endpoints(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        match self {
            Primitive::Line { start, end } => Some((*start, *end)),
            Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Some((
                Self::at_angle(center, *radius, *start_angle),
                Self::at_angle(center, *radius, *end_angle),
            )),
            Primitive::Circle { .. } => None,
        }
    }
}
