//! Form snapshot with explicitly derived outputs
//!
//! The original form recomputed its figures through a reactive dependency
//! graph. At this scale an explicit version is simpler and easier to test:
//! the snapshot owns the raw field text plus the selected unit, and every
//! mutation synchronously refreshes all derived outputs before it returns, so
//! the caller can never observe stale figures. Single-threaded by design; the
//! engine functions it calls hold no state of their own.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::input::{DieselParams, DistanceUnit, ElectricParams, TripInput};
use crate::engine::{compare, diesel_journey_cost, electric_journey_cost, ComparisonResult, CostResult};
use crate::field::parse_field;

/// Everything derived from the current form state, refreshed as one unit
///
/// Serialize-only: the label borrows from the unit enum, and outputs are
/// always rebuilt from a [`FormSnapshot`] rather than loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedOutputs {
    pub diesel: CostResult,
    pub electric: CostResult,
    pub comparison: ComparisonResult,
    /// Label for both tax fields; follows the selected unit with no hysteresis
    pub tax_label: &'static str,
}

/// Current state of the calculator form: raw field text plus the unit toggle
///
/// Field names mirror the form inputs. All fields start empty, which the
/// parse boundary treats as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    distance: String,
    unit: DistanceUnit,
    efficiency_mpg: String,
    price_per_litre: String,
    diesel_tax: String,
    consumption_kwh_per_100km: String,
    price_per_kwh: String,
    electric_tax: String,
}

impl FormSnapshot {
    /// Fresh form with every field empty and miles selected
    #[must_use]
    pub fn new() -> Self {
        FormSnapshot::default()
    }

    pub fn set_distance(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.distance);
        self.recompute()
    }

    pub fn set_unit(&mut self, unit: DistanceUnit) -> DerivedOutputs {
        self.unit = unit;
        self.recompute()
    }

    pub fn set_efficiency_mpg(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.efficiency_mpg);
        self.recompute()
    }

    pub fn set_price_per_litre(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.price_per_litre);
        self.recompute()
    }

    pub fn set_diesel_tax(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.diesel_tax);
        self.recompute()
    }

    pub fn set_consumption_kwh_per_100km(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.consumption_kwh_per_100km);
        self.recompute()
    }

    pub fn set_price_per_kwh(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.price_per_kwh);
        self.recompute()
    }

    pub fn set_electric_tax(&mut self, raw: &str) -> DerivedOutputs {
        raw.clone_into(&mut self.electric_tax);
        self.recompute()
    }

    /// Currently selected distance unit
    #[must_use]
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Trip input parsed from the current field text
    #[must_use]
    pub fn trip(&self) -> TripInput {
        TripInput::new(parse_field(&self.distance), self.unit)
    }

    /// Diesel parameters parsed from the current field text
    #[must_use]
    pub fn diesel_params(&self) -> DieselParams {
        DieselParams::new(
            parse_field(&self.efficiency_mpg),
            parse_field(&self.price_per_litre),
            parse_field(&self.diesel_tax),
        )
    }

    /// Electric parameters parsed from the current field text
    #[must_use]
    pub fn electric_params(&self) -> ElectricParams {
        ElectricParams::new(
            parse_field(&self.consumption_kwh_per_100km),
            parse_field(&self.price_per_kwh),
            parse_field(&self.electric_tax),
        )
    }

    /// Recompute every derived output from the current field text
    ///
    /// Pure over the snapshot's current state: calling this twice in a row
    /// yields identical outputs.
    #[must_use]
    pub fn recompute(&self) -> DerivedOutputs {
        let trip = self.trip();
        let diesel = diesel_journey_cost(&trip, &self.diesel_params());
        let electric = electric_journey_cost(&trip, &self.electric_params());
        let comparison = compare(diesel, electric);
        debug!(
            distance = trip.distance,
            unit = self.unit.label(),
            diesel_total = *diesel.total(),
            electric_total = *electric.total(),
            "form outputs recomputed"
        );
        DerivedOutputs {
            diesel,
            electric,
            comparison,
            tax_label: self.unit.tax_label(),
        }
    }
}
