// main.rs
//
// Generates the default workshop panel (5.75" wide, 9 fastener units tall,
// fasteners in rows 1 and 7 on both sides) and writes it to panel.dxf,
// ready for a CAD package to add switch and indicator holes.

use std::fs;

use paneldraft::io::DxfEmitter;
use paneldraft::{Panel, PanelSpec};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let panel = Panel::new(PanelSpec {
        width_in: 5.75,
        height_units: 9,
        left_mount: vec![1, 7],
        right_mount: vec![1, 7],
    })?;

    let mut drawing = DxfEmitter::new();
    panel.emit(&mut drawing);
    fs::write("panel.dxf", drawing.to_bytes()?)?;

    println!("Wrote panel.dxf");
    Ok(())
}
