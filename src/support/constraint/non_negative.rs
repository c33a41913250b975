use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Use this type with [`Constrained<T, NonNegative>`] to encode
/// non-negativity at the type level. A pipe's outer protective layer may be
/// absent, so its thickness is non-negative rather than strictly positive.
///
/// # Examples
///
/// ```
/// use pipedb::support::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let jacket = Constrained::<_, NonNegative>::new(0.003).unwrap();
/// assert_eq!(jacket.into_inner(), 0.003);
///
/// // Associated constructor:
/// let none = NonNegative::new(0.0).unwrap();
/// assert_eq!(none.into_inner(), 0.0);
///
/// // Error cases:
/// assert!(NonNegative::new(-0.001).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(-2.0).is_err());
        assert!(NonNegative::new(f64::NAN).is_err());
    }

    #[test]
    fn layer_thicknesses() {
        let jacket = Length::new::<millimeter>(3.0);
        assert!(NonNegative::new(jacket).is_ok());

        let absent = Length::new::<millimeter>(0.0);
        assert!(NonNegative::new(absent).is_ok());

        let negative = Length::new::<millimeter>(-1.0);
        assert!(NonNegative::new(negative).is_err());
    }
}
