use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive};

/// Constants for numerically safe comparisons.
pub trait SafeConstants {
    /// The smallest positive normal value. Tolerances below this cannot be
    /// distinguished from zero reliably.
    fn tiny_safe() -> Self;

    fn is_tiny(&self) -> bool;
}

/// A real floating point type the root finder can run on.
pub trait RealScalar:
    Float + FromPrimitive + SafeConstants + Debug + Display + Send + Sync + 'static
{
}

impl SafeConstants for f32 {
    fn tiny_safe() -> Self {
        Self::MIN_POSITIVE
    }

    fn is_tiny(&self) -> bool {
        self.abs() < Self::tiny_safe()
    }
}

impl SafeConstants for f64 {
    fn tiny_safe() -> Self {
        Self::MIN_POSITIVE
    }

    fn is_tiny(&self) -> bool {
        self.abs() < Self::tiny_safe()
    }
}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
