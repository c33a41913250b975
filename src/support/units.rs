//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (lengths,
//! conductivities). This module provides an alias that is useful for pipe
//! heat-loss modeling but isn't included in [`uom`].
//!
//! ## Linear thermal resistance
//!
//! The thermal resistance of a cylindrical shell per unit pipe length has
//! units of m·K/W, the inverse of a thermal conductivity. [`uom`] has no
//! named quantity for this dimension, so [`LinearThermalResistance`] defines
//! it directly over the ISQ dimension vector.

use uom::{
    si::{ISQ, Quantity, SI, f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin},
    typenum::{N1, P1, P3, Z0},
};

/// Thermal resistance per unit pipe length, m·K/W in SI.
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`LinearThermalResistance`] from its SI value in m·K/W.
#[must_use]
pub fn meter_kelvin_per_watt(value: f64) -> LinearThermalResistance {
    value / ThermalConductivity::new::<watt_per_meter_kelvin>(1.0)
}
