// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Coincidence tolerance for contour joins, in millimeters.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Coincidence tolerance for contour joins, in millimeters.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-6;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const INCH: Real = 25.4;
pub const MM: Real = 1.0;

/// Vertical pitch of one fastener unit, in inches (3/8").
pub const FASTENER_PITCH_IN: Real = 0.375;

/// Converts a length in inches to the millimeter space all geometry lives in.
///
/// Every input length crosses this boundary exactly once; primitives never
/// carry inch values.
#[inline]
pub const fn to_millimeters(inches: Real) -> Real {
    inches * INCH
}

/// Inverse of [`to_millimeters`]. Not used when generating geometry, but
/// handy for round-trip checks.
#[inline]
pub const fn to_inches(mm: Real) -> Real {
    mm / INCH
}
