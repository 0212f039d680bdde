use clap::Parser;
use drive_cost_core::{
    compare, diesel_journey_cost, electric_journey_cost, render_report, DerivedOutputs,
    DieselParams, DistanceUnit, ElectricParams, TripInput,
};

/// Journey cost demo with configurable parameters
///
/// Headless stand-in for the calculator form: the same inputs, computed once,
/// printed as the report the form would render. Defaults mirror the form's
/// placeholder values.
#[derive(Parser, Debug)]
#[command(name = "drive-cost-demo")]
#[command(about = "Diesel vs electric journey cost demo", long_about = None)]
struct Args {
    /// Trip distance in the selected unit
    #[arg(short, long, default_value_t = 100.0)]
    distance: f64,

    /// Distance unit (miles or km)
    #[arg(short, long, default_value = "miles")]
    unit: String,

    /// Diesel/petrol efficiency in miles per UK gallon
    #[arg(short, long, default_value_t = 45.0)]
    mpg: f64,

    /// Diesel/petrol price per litre
    #[arg(long, default_value_t = 1.45)]
    price_per_litre: f64,

    /// Diesel/petrol tax per distance unit
    #[arg(long, default_value_t = 0.0)]
    diesel_tax: f64,

    /// Electric consumption in kWh per 100 km
    #[arg(short, long, default_value_t = 15.5)]
    kwh_per_100km: f64,

    /// Electricity price per kWh
    #[arg(long, default_value_t = 0.28)]
    price_per_kwh: f64,

    /// Electric tax per distance unit
    #[arg(long, default_value_t = 0.0)]
    electric_tax: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let unit = match args.unit.to_ascii_lowercase().as_str() {
        "km" | "kilometres" | "kilometers" => DistanceUnit::Km,
        _ => DistanceUnit::Miles,
    };

    let trip = TripInput::new(args.distance, unit);
    let diesel_params = DieselParams::new(args.mpg, args.price_per_litre, args.diesel_tax);
    let electric_params =
        ElectricParams::new(args.kwh_per_100km, args.price_per_kwh, args.electric_tax);

    let diesel = diesel_journey_cost(&trip, &diesel_params);
    let electric = electric_journey_cost(&trip, &electric_params);
    let outputs = DerivedOutputs {
        diesel,
        electric,
        comparison: compare(diesel, electric),
        tax_label: unit.tax_label(),
    };

    println!(
        "Trip: {} {}(s); {}",
        args.distance,
        unit.label().to_ascii_lowercase(),
        outputs.tax_label
    );
    print!("{}", render_report(&outputs));
}
