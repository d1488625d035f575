//! Closed-contour validation.

use crate::float_types::{EPSILON, Real};
use crate::primitive::Primitive;
use nalgebra::Point2;

/// `true` when two points sit within the crate coincidence tolerance.
pub fn coincident(a: &Point2<Real>, b: &Point2<Real>) -> bool {
    (a - b).norm() <= EPSILON
}

/// A break in what should be a closed contour: the primitive at `index`
/// does not attach to the walk at `at`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gap {
    pub index: usize,
    pub at: Point2<Real>,
}

/// An ordered run of primitives expected to close into a single loop.
///
/// Consecutive primitives must share a coincident endpoint (an arc may be
/// entered from either of its angular ends), and the free endpoint of the
/// last primitive must return to the start of the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    pub primitives: Vec<Primitive>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Walks the primitives as an endpoint-linked chain and checks the loop
    /// closes, reporting the first join that gaps. Circles never chain.
    pub fn check_closed(&self) -> Result<(), Gap> {
        let Some(first) = self.primitives.first() else {
            return Ok(());
        };
        let Some((a, b)) = first.endpoints() else {
            return Err(Gap {
                index: 0,
                at: Point2::origin(),
            });
        };
        // The orientation of the first primitive is unknown; accept either.
        self.walk(a, b).or_else(|gap| self.walk(b, a).map_err(|_| gap))
    }

    fn walk(&self, origin: Point2<Real>, mut current: Point2<Real>) -> Result<(), Gap> {
        for (index, primitive) in self.primitives.iter().enumerate().skip(1) {
            let Some((a, b)) = primitive.endpoints() else {
                return Err(Gap { index, at: current });
            };
            if coincident(&a, &current) {
                current = b;
            } else if coincident(&b, &current) {
                current = a;
            } else {
                return Err(Gap { index, at: current });
            }
        }
        if coincident(&current, &origin) {
            Ok(())
        } else {
            Err(Gap {
                index: 0,
                at: current,
            })
        }
    }
}

impl From<Vec<Primitive>> for Contour {
    fn from(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }
}

impl Extend<Primitive> for Contour {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}
