use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level. Thermal conductivities and pipe diameters
/// are the usual customers.
///
/// # Examples
///
/// ```
/// use pipedb::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let di = Constrained::<_, StrictlyPositive>::new(0.08).unwrap();
/// assert_eq!(di.into_inner(), 0.08);
///
/// // Associated constructor:
/// let lambda = StrictlyPositive::new(50.0).unwrap();
/// assert_eq!(lambda.into_inner(), 50.0);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

    #[test]
    fn floats() {
        let x = Constrained::<f64, StrictlyPositive>::new(0.027).unwrap();
        assert_eq!(x.into_inner(), 0.027);

        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert!(StrictlyPositive::new(0.0).is_err());
        assert!(StrictlyPositive::new(-5.0).is_err());
        assert!(StrictlyPositive::new(f64::NAN).is_err());
    }

    #[test]
    fn conductivities() {
        let lambda = ThermalConductivity::new::<watt_per_meter_kelvin>(50.0);
        assert!(StrictlyPositive::new(lambda).is_ok());

        let lambda = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        assert!(StrictlyPositive::new(lambda).is_err());

        let lambda = ThermalConductivity::new::<watt_per_meter_kelvin>(-0.4);
        assert!(StrictlyPositive::new(lambda).is_err());
    }
}
