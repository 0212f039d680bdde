//! Journey cost engine
//!
//! Pure, deterministic conversion of trip and fuel parameters into per-fuel
//! journey costs and a diesel-vs-electric comparison. No side effects, no state
//! between calls, and no panics on domain input: unusable figures (zero or
//! missing efficiency) produce zero-valued results instead of errors.
//!
//! # Formulas
//! ```text
//! Diesel:   cost = (miles / MPG) × 4.54609 L/gal × price_per_litre
//! Electric: cost = (km / 100) × kWh_per_100km × price_per_kWh
//! Tax:      cost = distance (native unit) × tax_rate
//! ```
//! Tax is charged per the unit the distance was entered in: with the form set
//! to kilometres, the tax rate is a per-km rate.

use serde::{Deserialize, Serialize};

use crate::core_types::input::{DieselParams, ElectricParams, TripInput};
use crate::core_types::units::{KilowattHours, Litres, Pounds, LITRES_PER_UK_GALLON};

/// Two totals closer than this are reported as equal
pub const COST_EPSILON: f64 = 1e-9;

/// Cost breakdown for one fuel type over one trip
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostResult {
    /// Cost of the fuel or energy itself
    pub fuel_cost: Pounds,
    /// Per-distance tax over the trip
    pub tax_cost: Pounds,
}

impl CostResult {
    /// Total journey cost: fuel plus tax, exactly
    #[inline]
    #[must_use]
    pub fn total(&self) -> Pounds {
        self.fuel_cost + self.tax_cost
    }
}

/// Which fuel type came out cheaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cheaper {
    Diesel,
    Electric,
    Equal,
}

/// Diesel-vs-electric comparison over the same trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub diesel: CostResult,
    pub electric: CostResult,
    pub cheaper: Cheaper,
    /// |diesel total − electric total|, always >= 0
    pub absolute_difference: Pounds,
    /// Saving as a percentage of the more expensive option; 0 when both totals
    /// are 0 (never NaN or infinite)
    pub percentage_difference: f64,
}

/// Calculate the diesel/petrol journey cost
///
/// # Steps
/// 1. Convert the trip distance to miles (the MPG basis).
/// 2. Litres needed = (miles / MPG) × 4.54609.
/// 3. Fuel cost = litres × price per litre.
/// 4. Tax cost = native-unit distance × tax rate.
///
/// An efficiency of zero (empty form field) cannot be divided by, so the fuel
/// cost is zero; tax does not depend on efficiency and is still charged.
///
/// # Example
/// ```
/// use drive_cost_core::{diesel_journey_cost, DieselParams, DistanceUnit, TripInput};
///
/// let trip = TripInput::new(100.0, DistanceUnit::Miles);
/// let params = DieselParams::new(45.0, 1.45, 0.05);
/// let cost = diesel_journey_cost(&trip, &params);
/// assert!((*cost.fuel_cost - 14.65).abs() < 0.01);
/// assert_eq!(*cost.tax_cost, 5.0);
/// ```
#[must_use]
pub fn diesel_journey_cost(trip: &TripInput, params: &DieselParams) -> CostResult {
    let fuel_cost = if params.is_usable() {
        let miles = trip.distance_miles();
        let litres = Litres::new((*miles / params.efficiency_mpg) * LITRES_PER_UK_GALLON);
        clamp_cost(*litres * params.price_per_litre)
    } else {
        Pounds::ZERO
    };

    CostResult {
        fuel_cost,
        tax_cost: distance_tax(trip, params.tax_per_distance_unit),
    }
}

/// Calculate the electric journey cost
///
/// # Steps
/// 1. Convert the trip distance to kilometres (the kWh/100km basis).
/// 2. Energy needed = (km / 100) × consumption.
/// 3. Fuel cost = kWh × price per kWh.
/// 4. Tax cost = native-unit distance × tax rate.
#[must_use]
pub fn electric_journey_cost(trip: &TripInput, params: &ElectricParams) -> CostResult {
    let fuel_cost = if params.is_usable() {
        let km = trip.distance_km();
        let kwh = KilowattHours::new((*km / 100.0) * params.consumption_kwh_per_100km);
        clamp_cost(*kwh * params.price_per_kwh)
    } else {
        Pounds::ZERO
    };

    CostResult {
        fuel_cost,
        tax_cost: distance_tax(trip, params.tax_per_distance_unit),
    }
}

/// Per-distance tax, charged in the unit the distance was entered in
fn distance_tax(trip: &TripInput, tax_per_distance_unit: f64) -> Pounds {
    clamp_cost(trip.distance_native() * tax_per_distance_unit)
}

/// Clamp a computed amount to the finite, non-negative range costs live in
///
/// A distance near f64::MAX can overflow to infinity mid-formula, and
/// infinity times a zero price is NaN; both collapse to zero here instead of
/// reaching `Pounds::new`'s validation or the displayed output.
fn clamp_cost(value: f64) -> Pounds {
    Pounds::new(if value.is_finite() { value.max(0.0) } else { 0.0 })
}

/// Compare a diesel and an electric result over the same trip
///
/// Totals within [`COST_EPSILON`] of each other count as equal, to tolerate
/// floating-point noise. The percentage is taken relative to the more
/// expensive option and is 0 when both totals are 0, so the output never
/// contains NaN or infinity.
#[must_use]
pub fn compare(diesel: CostResult, electric: CostResult) -> ComparisonResult {
    let diesel_total = diesel.total();
    let electric_total = electric.total();

    let absolute_difference = diesel_total.abs_diff(electric_total);

    let cheaper = if *absolute_difference < COST_EPSILON {
        Cheaper::Equal
    } else if diesel_total < electric_total {
        Cheaper::Diesel
    } else {
        Cheaper::Electric
    };

    let baseline = diesel_total.max(electric_total);
    let percentage_difference = if *baseline > 0.0 {
        *absolute_difference / *baseline * 100.0
    } else {
        0.0
    };

    ComparisonResult {
        diesel,
        electric,
        cheaper,
        absolute_difference,
        percentage_difference,
    }
}
