//! Cost Engine Validation Test Suite
//!
//! Validates the journey-cost computations against hand-worked figures and the
//! engine's stated guarantees.
//!
//! # Test Categories
//! 1. Diesel cost formula validation
//! 2. Electric cost formula validation
//! 3. Per-distance tax validation
//! 4. Comparison semantics (cheaper, absolute, percentage)
//! 5. Worked end-to-end scenarios
//! 6. Numerical stability at extreme magnitudes
//!
//! Run tests with: `cargo test --test engine_validation`

use approx::{assert_abs_diff_eq, assert_relative_eq};
use drive_cost_core::{
    compare, diesel_journey_cost, electric_journey_cost, Cheaper, DieselParams, DistanceUnit,
    ElectricParams, TripInput, KM_PER_MILE, LITRES_PER_UK_GALLON,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: DIESEL COST FORMULA
// ═══════════════════════════════════════════════════════════════════════════════

/// With zero tax, fuel cost must equal (d / mpg) × 4.54609 × price exactly
#[test]
fn test_diesel_fuel_cost_matches_formula() {
    let cases = [
        (100.0, 45.0, 1.45),
        (1.0, 60.0, 1.80),
        (250.0, 38.5, 1.52),
        (0.0, 45.0, 1.45),
    ];
    for (distance, mpg, price) in cases {
        let trip = TripInput::new(distance, DistanceUnit::Miles);
        let params = DieselParams::new(mpg, price, 0.0);
        let cost = diesel_journey_cost(&trip, &params);
        let expected = (distance / mpg) * LITRES_PER_UK_GALLON * price;
        assert_abs_diff_eq!(*cost.fuel_cost, expected, epsilon = 1e-6);
        assert_eq!(*cost.tax_cost, 0.0, "no tax was configured: d={distance}");
    }
}

/// A km-unit trip converts to miles before the MPG division
#[test]
fn test_diesel_converts_km_distance_to_miles() {
    let trip = TripInput::new(160.934, DistanceUnit::Km);
    let params = DieselParams::new(45.0, 1.45, 0.0);
    let cost = diesel_journey_cost(&trip, &params);
    let expected = (100.0 / 45.0) * LITRES_PER_UK_GALLON * 1.45;
    assert_abs_diff_eq!(*cost.fuel_cost, expected, epsilon = 1e-6);
}

/// Zero MPG (empty efficiency field) must not divide; fuel cost is zero
#[test]
fn test_diesel_zero_mpg_is_safe() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let cost = diesel_journey_cost(&trip, &DieselParams::new(0.0, 1.45, 0.0));
    assert_eq!(*cost.fuel_cost, 0.0);
    assert!(cost.total().value().is_finite());
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: ELECTRIC COST FORMULA
// ═══════════════════════════════════════════════════════════════════════════════

/// With zero tax, energy cost must equal (km / 100) × kWh/100km × price
#[test]
fn test_electric_fuel_cost_matches_formula() {
    let cases = [(160.934, 15.5, 0.28), (100.0, 18.0, 0.32), (0.0, 15.5, 0.28)];
    for (km, consumption, price) in cases {
        let trip = TripInput::new(km, DistanceUnit::Km);
        let params = ElectricParams::new(consumption, price, 0.0);
        let cost = electric_journey_cost(&trip, &params);
        let expected = (km / 100.0) * consumption * price;
        assert_abs_diff_eq!(*cost.fuel_cost, expected, epsilon = 1e-6);
    }
}

/// A miles-unit trip converts to km before the per-100km consumption scaling
#[test]
fn test_electric_converts_miles_distance_to_km() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let params = ElectricParams::new(15.5, 0.28, 0.0);
    let cost = electric_journey_cost(&trip, &params);
    let expected = (100.0 * KM_PER_MILE / 100.0) * 15.5 * 0.28;
    assert_abs_diff_eq!(*cost.fuel_cost, expected, epsilon = 1e-6);
}

/// Zero consumption (empty field) must produce zero energy cost
#[test]
fn test_electric_zero_consumption_is_safe() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let cost = electric_journey_cost(&trip, &ElectricParams::new(0.0, 0.28, 0.0));
    assert_eq!(*cost.fuel_cost, 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: PER-DISTANCE TAX
// ═══════════════════════════════════════════════════════════════════════════════

/// Tax is distance × rate in the entered unit, identical for both fuels
#[test]
fn test_tax_is_native_distance_times_rate() {
    for (distance, rate) in [(100.0, 0.05), (42.0, 0.0), (0.0, 0.10), (250.0, 0.03)] {
        for unit in [DistanceUnit::Miles, DistanceUnit::Km] {
            let trip = TripInput::new(distance, unit);
            let diesel = diesel_journey_cost(&trip, &DieselParams::new(45.0, 1.45, rate));
            let electric = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, rate));
            assert_eq!(*diesel.tax_cost, distance * rate);
            assert_eq!(*electric.tax_cost, distance * rate);
        }
    }
}

/// The tax rate follows the display unit: the same rate over the same physical
/// trip charges more when the unit is km (more km than miles per trip)
#[test]
fn test_tax_is_charged_per_display_unit() {
    let miles_trip = TripInput::new(100.0, DistanceUnit::Miles);
    let km_trip = TripInput::new(160.934, DistanceUnit::Km);
    let params = DieselParams::new(45.0, 1.45, 0.05);
    let miles_cost = diesel_journey_cost(&miles_trip, &params);
    let km_cost = diesel_journey_cost(&km_trip, &params);
    // Same physical distance, same fuel cost, different tax basis
    assert_abs_diff_eq!(*miles_cost.fuel_cost, *km_cost.fuel_cost, epsilon = 1e-6);
    assert_abs_diff_eq!(*miles_cost.tax_cost, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(*km_cost.tax_cost, 160.934 * 0.05, epsilon = 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: COMPARISON SEMANTICS
// ═══════════════════════════════════════════════════════════════════════════════

/// Swapping which result plays diesel vs electric flips the winner but leaves
/// the absolute difference unchanged
#[test]
fn test_compare_swap_symmetry() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let a = diesel_journey_cost(&trip, &DieselParams::new(45.0, 1.45, 0.05));
    let b = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, 0.03));

    let forward = compare(a, b);
    let swapped = compare(b, a);

    assert_eq!(forward.cheaper, Cheaper::Electric);
    assert_eq!(swapped.cheaper, Cheaper::Diesel);
    assert_eq!(forward.absolute_difference, swapped.absolute_difference);
    assert_abs_diff_eq!(
        forward.percentage_difference,
        swapped.percentage_difference,
        epsilon = 1e-12
    );
}

/// Two zero totals compare as equal with a zero percentage, never NaN
#[test]
fn test_compare_zero_totals() {
    let trip = TripInput::new(0.0, DistanceUnit::Miles);
    let diesel = diesel_journey_cost(&trip, &DieselParams::default());
    let electric = electric_journey_cost(&trip, &ElectricParams::default());
    let cmp = compare(diesel, electric);
    assert_eq!(cmp.cheaper, Cheaper::Equal);
    assert_eq!(cmp.percentage_difference, 0.0);
    assert_eq!(*cmp.absolute_difference, 0.0);
}

/// Percentage is relative to the more expensive option
#[test]
fn test_percentage_uses_expensive_baseline() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let diesel = diesel_journey_cost(&trip, &DieselParams::new(45.0, 1.45, 0.0));
    let electric = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, 0.0));
    let cmp = compare(diesel, electric);

    let expensive = cmp.diesel.total().max(cmp.electric.total());
    let expected = *cmp.absolute_difference / *expensive * 100.0;
    assert_relative_eq!(cmp.percentage_difference, expected, max_relative = 1e-12);
    assert!(cmp.percentage_difference <= 100.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: WORKED SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════════

/// 100 miles at 45 MPG, £1.45/L, 5p/mile tax
/// Fuel: (100/45) × 4.54609 × 1.45 = £14.6485; tax £5.00; total £19.6485
#[test]
fn test_scenario_diesel_100_miles() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let cost = diesel_journey_cost(&trip, &DieselParams::new(45.0, 1.45, 0.05));
    assert_abs_diff_eq!(*cost.fuel_cost, 14.648512, epsilon = 1e-5);
    assert_abs_diff_eq!(*cost.tax_cost, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(*cost.total(), 19.648512, epsilon = 1e-5);
}

/// 100 miles at 15.5 kWh/100km, £0.28/kWh, 3p/mile tax
/// km = 160.934; energy ≈ 24.9448 kWh; fuel ≈ £6.9845; tax £3.00; total ≈ £9.9845
#[test]
fn test_scenario_electric_100_miles() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let cost = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, 0.03));
    assert_abs_diff_eq!(*cost.fuel_cost, 6.984536, epsilon = 1e-5);
    assert_abs_diff_eq!(*cost.tax_cost, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(*cost.total(), 9.984536, epsilon = 1e-5);
}

/// Combining the two scenarios: electric wins by ≈ £9.66, ≈ 49.2% of diesel
#[test]
fn test_scenario_comparison() {
    let trip = TripInput::new(100.0, DistanceUnit::Miles);
    let diesel = diesel_journey_cost(&trip, &DieselParams::new(45.0, 1.45, 0.05));
    let electric = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, 0.03));
    let cmp = compare(diesel, electric);

    assert_eq!(cmp.cheaper, Cheaper::Electric);
    assert_abs_diff_eq!(*cmp.absolute_difference, 9.663976, epsilon = 1e-5);
    assert_abs_diff_eq!(cmp.percentage_difference, 49.18, epsilon = 0.01);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 6: NUMERICAL STABILITY AT EXTREME MAGNITUDES
// ═══════════════════════════════════════════════════════════════════════════════

/// A distance near f64::MAX overflows to infinity in the miles→km conversion;
/// a zero tariff then multiplies that infinity into NaN. The engine must
/// absorb both, not panic or surface them
#[test]
fn test_electric_extreme_distance_with_zero_tariff() {
    let trip = TripInput::new(1.7e308, DistanceUnit::Miles);
    let cost = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.0, 0.0));
    assert_eq!(*cost.fuel_cost, 0.0);
    assert!(cost.total().value().is_finite());
}

/// The same extreme distance with a real tariff overflows the energy cost
/// itself; the result must still be finite and non-negative
#[test]
fn test_electric_extreme_distance_with_priced_tariff() {
    let trip = TripInput::new(1.7e308, DistanceUnit::Miles);
    let cost = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, 0.0));
    assert!(cost.fuel_cost.value().is_finite());
    assert!(*cost.fuel_cost >= 0.0);
    assert!(cost.total().value().is_finite());
}

/// Diesel analog: a tiny-but-positive MPG drives litres to infinity, and a
/// zero pump price turns that into NaN
#[test]
fn test_diesel_overflowing_litres_with_zero_price() {
    let trip = TripInput::new(1.7e308, DistanceUnit::Miles);
    let cost = diesel_journey_cost(&trip, &DieselParams::new(0.01, 0.0, 0.0));
    assert_eq!(*cost.fuel_cost, 0.0);
    assert!(cost.total().value().is_finite());
}

/// Comparing two extreme-magnitude results stays finite end to end
#[test]
fn test_compare_extreme_magnitudes_stays_finite() {
    let trip = TripInput::new(1.7e308, DistanceUnit::Miles);
    let diesel = diesel_journey_cost(&trip, &DieselParams::new(0.01, 0.0, 0.0));
    let electric = electric_journey_cost(&trip, &ElectricParams::new(15.5, 0.28, 0.0));
    let cmp = compare(diesel, electric);
    assert!(cmp.absolute_difference.value().is_finite());
    assert!(cmp.percentage_difference.is_finite());
}
