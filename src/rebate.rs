//! Rebate cutouts: the clearance pocket cut into the fascia around each
//! fastener, and the fillets easing it into the straight edge.

use crate::emitter::GeometryEmitter;
use crate::float_types::{Real, to_millimeters};
use crate::panel::{
    FASCIA_INSET_IN, FASTENER_EDGE_OFFSET_IN, FILLET_RADIUS_IN, POCKET_RADIUS_IN, Panel, Side,
};
use crate::primitive::{Layer, Primitive};
use nalgebra::Point2;

impl Panel {
    /// Emits the rebate around the fastener in row `position` on `side`,
    /// continuing the fascia edge upward from `entry`, and returns the
    /// point where the edge resumes above the pocket.
    ///
    /// The sequence is fixed: lead-in along the edge, a 1/32" fillet
    /// turning off it into the lower pocket mouth, the mouth line, the 180°
    /// pocket wall around the fastener centre, and the mirrored mouth line
    /// and fillet back out. Every join reuses the coordinate it meets at,
    /// so the boundary stays gap-free by construction.
    pub(crate) fn emit_rebate(
        &self,
        side: Side,
        position: u32,
        entry: Point2<Real>,
        out: &mut impl GeometryEmitter,
    ) -> Point2<Real> {
        let w = self.width();
        let cy = self.fastener_y(position);
        let fillet_r = to_millimeters(FILLET_RADIUS_IN);
        let pocket_r = to_millimeters(POCKET_RADIUS_IN);
        let edge_x = side.x_from_edge(w, to_millimeters(FASCIA_INSET_IN));
        let corner_x = side.x_from_edge(w, to_millimeters(FASCIA_INSET_IN) + fillet_r);
        let pocket_x = side.x_from_edge(w, to_millimeters(FASTENER_EDGE_OFFSET_IN));

        let mouth_lo = cy - pocket_r;
        let mouth_hi = cy + pocket_r;
        let tangent_lo = mouth_lo - fillet_r;
        let tangent_hi = mouth_hi + fillet_r;

        out.emit(self.locating_line(side, cy), Layer::FasciaConstruction);

        // Lead-in along the fascia edge.
        out.emit(
            Primitive::line(entry, Point2::new(edge_x, tangent_lo)),
            Layer::Fascia,
        );
        // Fillet turning off the edge into the lower mouth.
        let (a0, a1) = side.arc_angles(90.0, 180.0);
        out.emit(
            Primitive::arc(Point2::new(corner_x, tangent_lo), fillet_r, a0, a1),
            Layer::Fascia,
        );
        // Lower mouth.
        out.emit(
            Primitive::line(
                Point2::new(corner_x, mouth_lo),
                Point2::new(pocket_x, mouth_lo),
            ),
            Layer::Fascia,
        );
        // Pocket wall around the fastener.
        let (a0, a1) = side.arc_angles(270.0, 90.0);
        out.emit(
            Primitive::arc(Point2::new(pocket_x, cy), pocket_r, a0, a1),
            Layer::Fascia,
        );
        // Upper mouth.
        out.emit(
            Primitive::line(
                Point2::new(corner_x, mouth_hi),
                Point2::new(pocket_x, mouth_hi),
            ),
            Layer::Fascia,
        );
        // Fillet back out to the edge.
        let (a0, a1) = side.arc_angles(180.0, 270.0);
        out.emit(
            Primitive::arc(Point2::new(corner_x, tangent_hi), fillet_r, a0, a1),
            Layer::Fascia,
        );

        Point2::new(edge_x, tangent_hi)
    }
}
