//! Panel parameters and the top-level layout generator.

use crate::emitter::GeometryEmitter;
use crate::errors::ValidationError;
use crate::float_types::{FASTENER_PITCH_IN, Real, to_millimeters};
use crate::primitive::{Layer, Primitive};
use nalgebra::Point2;
use std::fmt;

/// Fastener centrelines sit this far in from the plate edge (3/16").
pub(crate) const FASTENER_EDGE_OFFSET_IN: Real = 3.0 / 16.0;
/// A fastener centre sits half a unit above its row index.
pub(crate) const FASTENER_ROW_OFFSET_IN: Real = FASTENER_PITCH_IN / 2.0;
/// The fascia is smaller than the plate by this much on every side (1/32").
pub(crate) const FASCIA_INSET_IN: Real = 1.0 / 32.0;
/// Radius of the fascia corners and the rebate lead-in/lead-out fillets (1/32").
pub(crate) const FILLET_RADIUS_IN: Real = 1.0 / 32.0;
/// Rebate pocket radius: 3/16" fastener shank radius plus 1/16" clearance all round.
pub(crate) const POCKET_RADIUS_IN: Real = 3.0 / 16.0 + 1.0 / 16.0;
/// Drilled mounting-hole radius in the plate, mm.
pub(crate) const MOUNT_HOLE_RADIUS: Real = 2.0;
/// Construction lines overrun the panel extents by this much, mm.
pub(crate) const OVERSHOOT: Real = 10.0;
/// The decal text centreline sits 13/64" below the top edge.
pub(crate) const DECAL_CENTRELINE_IN: Real = 13.0 / 64.0;

/// Which vertical edge of the panel a fastener column belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Maps a distance measured inward from this side's plate edge to a
    /// panel x-coordinate. Both sides share every formula this way; nothing
    /// is hand-mirrored.
    pub(crate) fn x_from_edge(self, width: Real, inset: Real) -> Real {
        match self {
            Side::Left => inset,
            Side::Right => width - inset,
        }
    }

    /// Mirrors a counter-clockwise arc across the panel's vertical midline.
    ///
    /// Left-side angles pass through unchanged. On the right the arc is
    /// reflected (θ → 180° − θ) and its endpoints swap so the sweep stays
    /// counter-clockwise.
    pub(crate) fn arc_angles(self, start_angle: Real, end_angle: Real) -> (Real, Real) {
        match self {
            Side::Left => (start_angle, end_angle),
            Side::Right => (
                (180.0 - end_angle).rem_euclid(360.0),
                (180.0 - start_angle).rem_euclid(360.0),
            ),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Input parameters for one panel, as the workshop measures them: width in
/// inches, height in fastener units, and the fastener rows populated on
/// each side (`[]` for none). Row 0 is the bottom edge and never carries a
/// fastener; each side's list must be strictly ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSpec {
    pub width_in: Real,
    pub height_units: u32,
    pub left_mount: Vec<u32>,
    pub right_mount: Vec<u32>,
}

impl PanelSpec {
    /// Checks the spec before any geometry is built.
    ///
    /// Position checks work in integer units: the pocket-plus-fillet
    /// envelope spans 9/32" above and below a fastener centre, so
    /// neighbours closer than two units (3/4" centre spacing against the
    /// 9/16" minimum) collide, and a fastener in the top row
    /// (`height - 1`) runs into the corner arc 1/16" below the top edge.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.width_in.is_finite() || self.width_in <= 0.0 || self.height_units == 0 {
            return Err(ValidationError::InvalidDimension {
                width_in: self.width_in,
                height_units: self.height_units,
            });
        }
        for (side, mounts) in [
            (Side::Left, &self.left_mount),
            (Side::Right, &self.right_mount),
        ] {
            let mut previous: Option<u32> = None;
            for &position in mounts {
                if position == 0 || position >= self.height_units {
                    return Err(ValidationError::InvalidFastenerPosition { side, position });
                }
                if let Some(prev) = previous {
                    if position <= prev {
                        return Err(ValidationError::InvalidFastenerPosition { side, position });
                    }
                    if position - prev < 2 {
                        return Err(ValidationError::DegenerateRebate {
                            side,
                            position,
                            previous: Some(prev),
                        });
                    }
                }
                if position + 1 >= self.height_units {
                    return Err(ValidationError::DegenerateRebate {
                        side,
                        position,
                        previous: None,
                    });
                }
                previous = Some(position);
            }
        }
        Ok(())
    }
}

/// A validated panel with its outer extents resolved to millimeters.
///
/// Construction is the only fallible step; everything after
/// [`Panel::new`] is pure deterministic geometry over immutable input.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    spec: PanelSpec,
    width: Real,
    top: Real,
}

impl Panel {
    /// Validates `spec` and resolves the panel extents.
    pub fn new(spec: PanelSpec) -> Result<Self, ValidationError> {
        spec.validate()?;
        let width = to_millimeters(spec.width_in);
        let top = to_millimeters(spec.height_units as Real * FASTENER_PITCH_IN);
        tracing::debug!(width_mm = width, height_mm = top, "panel spec validated");
        Ok(Self { spec, width, top })
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    /// x of the plate's right edge, mm.
    pub fn width(&self) -> Real {
        self.width
    }

    /// y of the plate's top edge, mm.
    pub fn top(&self) -> Real {
        self.top
    }

    /// The fastener rows populated on `side`, ascending.
    pub fn mounts(&self, side: Side) -> &[u32] {
        match side {
            Side::Left => &self.spec.left_mount,
            Side::Right => &self.spec.right_mount,
        }
    }

    /// y-coordinate of the fastener centre in row `position`, mm.
    pub(crate) fn fastener_y(&self, position: u32) -> Real {
        to_millimeters(position as Real * FASTENER_PITCH_IN + FASTENER_ROW_OFFSET_IN)
    }

    /// Vertical construction line through `x`, overrunning top and bottom.
    pub(crate) fn vertical_construction(&self, x: Real) -> Primitive {
        Primitive::line(
            Point2::new(x, -OVERSHOOT),
            Point2::new(x, self.top + OVERSHOOT),
        )
    }

    /// Horizontal locating line at height `y`, from just outside `side`'s
    /// edge to the panel midline.
    pub(crate) fn locating_line(&self, side: Side, y: Real) -> Primitive {
        let outside = side.x_from_edge(self.width, -OVERSHOOT);
        let midline = self.width / 2.0;
        match side {
            Side::Left => Primitive::line(Point2::new(outside, y), Point2::new(midline, y)),
            Side::Right => Primitive::line(Point2::new(midline, y), Point2::new(outside, y)),
        }
    }

    /// Emits the complete drawing: plate, fascia, then the decal reference,
    /// each group bottom to top with the left side before the right.
    pub fn emit(&self, out: &mut impl GeometryEmitter) {
        tracing::debug!(spec = ?self.spec, "emitting panel layout");
        self.emit_plate(out);
        self.emit_fascia(out);
        self.emit_decal(out);
    }

    /// Centreline for the panel name, above the top fastener row.
    fn emit_decal(&self, out: &mut impl GeometryEmitter) {
        let y = self.top - to_millimeters(DECAL_CENTRELINE_IN);
        out.emit(
            Primitive::line(
                Point2::new(-OVERSHOOT, y),
                Point2::new(self.width + OVERSHOOT, y),
            ),
            Layer::DecalConstruction,
        );
    }
}
