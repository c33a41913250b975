use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
///
/// Implement this trait for your type `T` if you want to use it with
/// `Constrained<T, UnitInterval>`. Implementations should ensure that
/// `zero() ≤ one()` under the type's `PartialOrd` so the interval is
/// well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Marker type enforcing the closed unit interval `0 ≤ x ≤ 1`.
///
/// Colormap positions are the main customer: a pipe variant's position
/// within its diameter block is always a fraction of the block size.
///
/// # Examples
///
/// ```
/// use pipedb::support::constraint::{Constrained, UnitInterval};
///
/// let position = UnitInterval::new(0.25).unwrap();
/// assert_eq!(position.into_inner(), 0.25);
///
/// assert!(UnitInterval::new(0.0).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(-0.1).is_err());
/// assert!(UnitInterval::new(1.1).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a [`Constrained<T, UnitInterval>`] if the value lies in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns an error if the value lies outside the interval or is `NaN`.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => return Err(ConstraintError::BelowMinimum),
            None => return Err(ConstraintError::NotANumber),
            Some(_) => {}
        }
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
            Some(_) => Ok(()),
        }
    }
}
