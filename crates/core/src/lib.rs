//! Drive Cost Core Library
//!
//! The cost engine behind a diesel-vs-electric journey cost calculator.
//! Takes a trip (distance plus a miles/km toggle), diesel/petrol parameters
//! (MPG on the UK-gallon basis, price per litre, optional per-distance tax),
//! and electric parameters (kWh per 100 km, price per kWh, optional tax), and
//! produces per-fuel journey costs plus a comparison with absolute and
//! percentage savings.
//!
//! Everything is a pure function over immutable value records. Invalid or
//! missing form input is absorbed into defaults at the boundary; the engine
//! never raises for domain input and never emits NaN or infinity.

// Core types and utilities
pub mod core_types;

// Input boundary: raw form text to safe numbers
pub mod field;

// The cost engine itself
pub mod engine;

// Form state with explicitly derived outputs
pub mod snapshot;

// Text rendering of the output sections
pub mod report;

// Re-export core types
pub use core_types::{DieselParams, DistanceUnit, ElectricParams, TripInput};
pub use core_types::{Kilometres, KilowattHours, Litres, Miles, Pounds};
pub use core_types::{KM_PER_MILE, LITRES_PER_UK_GALLON};

// Re-export engine operations and results
pub use engine::{
    compare, diesel_journey_cost, electric_journey_cost, Cheaper, ComparisonResult, CostResult,
    COST_EPSILON,
};
pub use field::{parse_field, parse_field_or};
pub use report::{format_currency, render_report, savings_line};
pub use snapshot::{DerivedOutputs, FormSnapshot};
