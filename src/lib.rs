//! Parametric 2D layouts for **flight-simulator instrument panels**.
//!
//! Given a panel's width in inches, its height in fastener units (one unit
//! is 3/8"), and the fastener rows populated on each side, this crate
//! computes the complete drawing of the rear support plate and the inset
//! front fascia: closed boundaries built from lines and arcs, drilled
//! mounting-hole circles, and the construction lines a draftsperson wants,
//! each tagged with one of six fixed [layers](Layer).
//!
//! The crate computes geometry only. Finished primitives leave through the
//! [`GeometryEmitter`] trait one at a time, in a deterministic order (plate,
//! then fascia, then decal references, bottom to top within each side), so
//! identical input always produces an identical stream.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export sink
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use paneldraft::{Layer, Panel, PanelSpec, Primitive};
//!
//! let panel = Panel::new(PanelSpec {
//!     width_in: 5.75,
//!     height_units: 9,
//!     left_mount: vec![1, 7],
//!     right_mount: vec![1, 7],
//! })?;
//!
//! let mut drawing: Vec<(Primitive, Layer)> = Vec::new();
//! panel.emit(&mut drawing);
//! assert!(drawing.iter().any(|(_, layer)| *layer == Layer::Fascia));
//! # Ok::<(), paneldraft::ValidationError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod primitive;
pub mod contour;
pub mod emitter;
pub mod panel;
pub mod io;

mod plate;
mod rebate;
mod fascia;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use contour::Contour;
pub use emitter::GeometryEmitter;
pub use errors::ValidationError;
pub use panel::{Panel, PanelSpec, Side};
pub use primitive::{Layer, Primitive};
