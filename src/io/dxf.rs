use crate::emitter::GeometryEmitter;
use crate::primitive::{Layer, Primitive};

use dxf::entities::{self, Entity, EntityType};
use dxf::tables;
use dxf::{Drawing, Point as DxfPoint};
use std::error::Error;

/// DXF drawing sink.
///
/// Registers the six drawing layers up front (construction layers get the
/// `CENTER` linetype, resolved by the receiving CAD application), then
/// appends one DXF entity per emitted primitive.
pub struct DxfEmitter {
    drawing: Drawing,
}

impl DxfEmitter {
    pub fn new() -> Self {
        let mut drawing = Drawing::new();
        for layer in Layer::ALL {
            let mut table_layer = tables::Layer {
                name: layer.name().to_string(),
                ..Default::default()
            };
            if layer.is_construction() {
                table_layer.line_type_name = "CENTER".to_string();
            }
            drawing.add_layer(table_layer);
        }
        Self { drawing }
    }

    /// Serializes the accumulated drawing to DXF text.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, Box<dyn Error>> {
        let mut buffer = Vec::new();
        self.drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}

impl Default for DxfEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryEmitter for DxfEmitter {
    fn emit(&mut self, primitive: Primitive, layer: Layer) {
        #[allow(clippy::unnecessary_cast)]
        let specific = match primitive {
            Primitive::Line { start, end } => EntityType::Line(entities::Line::new(
                DxfPoint::new(start.x as f64, start.y as f64, 0.0),
                DxfPoint::new(end.x as f64, end.y as f64, 0.0),
            )),
            Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => EntityType::Arc(entities::Arc::new(
                DxfPoint::new(center.x as f64, center.y as f64, 0.0),
                radius as f64,
                start_angle as f64,
                end_angle as f64,
            )),
            Primitive::Circle { center, radius } => EntityType::Circle(entities::Circle::new(
                DxfPoint::new(center.x as f64, center.y as f64, 0.0),
                radius as f64,
            )),
        };
        let mut entity = Entity::new(specific);
        entity.common.layer = layer.name().to_string();
        self.drawing.add_entity(entity);
    }
}
