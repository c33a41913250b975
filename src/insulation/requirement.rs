use uom::si::f64::Length;

/// Outcome of sizing the insulation for one pipe variant.
///
/// A bare wall that already meets the target U-value is a successful result,
/// not an error, and is represented explicitly instead of as a zero length so
/// downstream catalog writers can omit the insulation fields entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsulationRequirement {
    /// The bare wall already meets or exceeds the target U-value.
    None,
    /// The insulation thickness that closes the resistance budget.
    Thickness(Length),
}

impl InsulationRequirement {
    /// Returns the required thickness, or `None` when no insulation is needed.
    #[must_use]
    pub fn thickness(&self) -> Option<Length> {
        match *self {
            Self::Thickness(t) => Some(t),
            Self::None => None,
        }
    }

    /// Whether the bare wall suffices.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::millimeter;

    #[test]
    fn thickness_accessor() {
        let required = InsulationRequirement::Thickness(Length::new::<millimeter>(33.4));
        assert_eq!(
            required.thickness(),
            Some(Length::new::<millimeter>(33.4))
        );
        assert!(!required.is_none());

        assert_eq!(InsulationRequirement::None.thickness(), None);
        assert!(InsulationRequirement::None.is_none());
    }
}
