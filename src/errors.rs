//! Validation errors

use crate::float_types::Real;
use crate::panel::Side;
use thiserror::Error;

/// All the ways a panel spec can be unusable.
///
/// Raised by [`Panel::new`](crate::panel::Panel::new) before the first
/// primitive reaches the emitter; generation is all-or-nothing, so a drawing
/// is never left half-emitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Panel width or height is zero, negative, or not finite.
    #[error("panel dimensions must be positive: {width_in}\" x {height_units} units")]
    InvalidDimension { width_in: Real, height_units: u32 },

    /// A fastener position is outside (0, height) or breaks the strictly
    /// ascending order of its side's list.
    #[error("fastener position {position} on the {side} side is out of range or out of order")]
    InvalidFastenerPosition { side: Side, position: u32 },

    /// A rebate pocket would run into its neighbour (`previous` holds the
    /// conflicting lower position) or into the top corner arc (`previous`
    /// is `None`).
    #[error("rebate at fastener position {position} on the {side} side would overlap neighbouring geometry")]
    DegenerateRebate {
        side: Side,
        position: u32,
        previous: Option<u32>,
    },
}
