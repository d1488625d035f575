//! Support-plate layout: the outer rectangle, drilled mounting holes, and
//! their locating lines.

use crate::emitter::GeometryEmitter;
use crate::float_types::to_millimeters;
use crate::panel::{FASTENER_EDGE_OFFSET_IN, MOUNT_HOLE_RADIUS, Panel, Side};
use crate::primitive::{Layer, Primitive};
use nalgebra::Point2;

impl Panel {
    pub(crate) fn emit_plate(&self, out: &mut impl GeometryEmitter) {
        let (w, t) = (self.width(), self.top());

        // Outline, wound bottom → right → top → left.
        let corners = [
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, t),
            Point2::new(0.0, t),
        ];
        for i in 0..corners.len() {
            out.emit(
                Primitive::line(corners[i], corners[(i + 1) % corners.len()]),
                Layer::Plate,
            );
        }

        for side in [Side::Left, Side::Right] {
            self.emit_plate_mounts(side, out);
        }
    }

    fn emit_plate_mounts(&self, side: Side, out: &mut impl GeometryEmitter) {
        let mounts = self.mounts(side);
        if mounts.is_empty() {
            return;
        }
        let column_x = side.x_from_edge(self.width(), to_millimeters(FASTENER_EDGE_OFFSET_IN));
        out.emit(
            self.vertical_construction(column_x),
            Layer::PlateConstruction,
        );
        for &position in mounts {
            let cy = self.fastener_y(position);
            out.emit(self.locating_line(side, cy), Layer::PlateConstruction);
            out.emit(
                Primitive::circle(Point2::new(column_x, cy), MOUNT_HOLE_RADIUS),
                Layer::Plate,
            );
        }
    }
}
