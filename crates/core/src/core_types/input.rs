//! Input records for a single cost computation
//!
//! Instances are built fresh from the current form state for every computation;
//! nothing here is mutated in place or carried across computations.

use serde::{Deserialize, Serialize};

use super::units::{Kilometres, Miles};

/// Distance unit selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Km,
}

impl DistanceUnit {
    /// Display label for the unit itself
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "Mile",
            DistanceUnit::Km => "KM",
        }
    }

    /// Label shown next to each fuel's tax input field
    ///
    /// A pure function of the selected unit: switching miles -> km -> miles
    /// restores "Tax per Mile" with no state carried from before the switch.
    #[must_use]
    pub fn tax_label(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "Tax per Mile",
            DistanceUnit::Km => "Tax per KM",
        }
    }
}

/// The trip being costed: a distance in the unit the user selected
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripInput {
    /// Distance as entered, in `unit` (non-negative)
    pub distance: f64,
    pub unit: DistanceUnit,
}

impl TripInput {
    /// Build a trip, clamping negative or non-finite distances to zero
    #[must_use]
    pub fn new(distance: f64, unit: DistanceUnit) -> Self {
        let distance = if distance.is_finite() { distance.max(0.0) } else { 0.0 };
        TripInput { distance, unit }
    }

    /// Trip distance converted to statute miles
    #[must_use]
    pub fn distance_miles(&self) -> Miles {
        match self.unit {
            DistanceUnit::Miles => Miles::new(self.distance_native()),
            DistanceUnit::Km => Kilometres::new(self.distance_native()).to_miles(),
        }
    }

    /// Trip distance converted to kilometres
    #[must_use]
    pub fn distance_km(&self) -> Kilometres {
        match self.unit {
            DistanceUnit::Miles => Miles::new(self.distance_native()).to_kilometres(),
            DistanceUnit::Km => Kilometres::new(self.distance_native()),
        }
    }

    /// Trip distance in the unit the user entered, used for per-distance tax
    ///
    /// Re-clamped on read so a hand-built `TripInput` with a negative or
    /// non-finite distance still behaves like an empty form field.
    #[must_use]
    pub fn distance_native(&self) -> f64 {
        sanitize(self.distance)
    }
}

/// Diesel/petrol cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DieselParams {
    /// Fuel efficiency in miles per imperial (UK) gallon
    pub efficiency_mpg: f64,
    /// Pump price per litre
    pub price_per_litre: f64,
    /// Tax charged per unit of distance, in the form's selected unit
    pub tax_per_distance_unit: f64,
}

impl DieselParams {
    /// Build params, clamping negative or non-finite values to zero
    #[must_use]
    pub fn new(efficiency_mpg: f64, price_per_litre: f64, tax_per_distance_unit: f64) -> Self {
        DieselParams {
            efficiency_mpg: sanitize(efficiency_mpg),
            price_per_litre: sanitize(price_per_litre),
            tax_per_distance_unit: sanitize(tax_per_distance_unit),
        }
    }

    /// Whether the efficiency figure can be divided by
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.efficiency_mpg > 0.0
    }
}

/// Electric cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectricParams {
    /// Energy consumption in kWh per 100 km
    pub consumption_kwh_per_100km: f64,
    /// Tariff price per kWh
    pub price_per_kwh: f64,
    /// Tax charged per unit of distance, in the form's selected unit
    pub tax_per_distance_unit: f64,
}

impl ElectricParams {
    /// Build params, clamping negative or non-finite values to zero
    #[must_use]
    pub fn new(
        consumption_kwh_per_100km: f64,
        price_per_kwh: f64,
        tax_per_distance_unit: f64,
    ) -> Self {
        ElectricParams {
            consumption_kwh_per_100km: sanitize(consumption_kwh_per_100km),
            price_per_kwh: sanitize(price_per_kwh),
            tax_per_distance_unit: sanitize(tax_per_distance_unit),
        }
    }

    /// Whether the consumption figure produces a meaningful energy draw
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.consumption_kwh_per_100km > 0.0
    }
}

/// Clamp a raw form value into the non-negative finite range the engine accepts
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
