//! Plain-text rendering of the calculator's output sections
//!
//! Mirrors the sections the form renders: a "Journey Cost" figure per fuel, a
//! "Cost Comparison" block, and a savings card framed from the switch-to-
//! electric decision: "You Save" when electric is cheaper, "Extra Cost" when
//! it is dearer, and a neutral line when the totals tie. All currency is
//! formatted to 2 decimal places.

use std::fmt::Write;

use crate::engine::Cheaper;
use crate::snapshot::DerivedOutputs;

/// Format a monetary value the way the form displays it
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("£{value:.2}")
}

/// Savings line, framed from the choose-electric decision
///
/// "You Save" when electric is the cheaper option, "Extra Cost" when diesel
/// is. Returns `None` when the totals are equal (nothing saved, nothing
/// extra).
#[must_use]
pub fn savings_line(outputs: &DerivedOutputs) -> Option<String> {
    let cmp = &outputs.comparison;
    let amount = format_currency(*cmp.absolute_difference);
    let percent = cmp.percentage_difference;
    match cmp.cheaper {
        Cheaper::Electric => Some(format!(
            "You Save {amount} ({percent:.1}%) by choosing Electric"
        )),
        Cheaper::Diesel => Some(format!(
            "Extra Cost {amount} ({percent:.1}%) for choosing Electric"
        )),
        Cheaper::Equal => None,
    }
}

/// Render the full report: journey costs, comparison, savings
#[must_use]
pub fn render_report(outputs: &DerivedOutputs) -> String {
    let mut out = String::new();

    writeln!(out, "Journey Cost").ok();
    writeln!(
        out,
        "  Diesel/Petrol: {}  (fuel {}, tax {})",
        format_currency(*outputs.diesel.total()),
        format_currency(*outputs.diesel.fuel_cost),
        format_currency(*outputs.diesel.tax_cost)
    )
    .ok();
    writeln!(
        out,
        "  Electric:      {}  (fuel {}, tax {})",
        format_currency(*outputs.electric.total()),
        format_currency(*outputs.electric.fuel_cost),
        format_currency(*outputs.electric.tax_cost)
    )
    .ok();

    writeln!(out, "Cost Comparison").ok();
    if let Some(line) = savings_line(outputs) {
        writeln!(out, "  {line}").ok();
    } else {
        writeln!(out, "  Both options cost the same").ok();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FormSnapshot;

    fn worked_example() -> DerivedOutputs {
        let mut form = FormSnapshot::new();
        form.set_distance("100");
        form.set_efficiency_mpg("45");
        form.set_price_per_litre("1.45");
        form.set_diesel_tax("0.05");
        form.set_consumption_kwh_per_100km("15.5");
        form.set_price_per_kwh("0.28");
        form.set_electric_tax("0.03")
    }

    #[test]
    fn test_currency_is_two_decimal_places() {
        assert_eq!(format_currency(14.6312), "£14.63");
        assert_eq!(format_currency(5.0), "£5.00");
        assert_eq!(format_currency(0.0), "£0.00");
    }

    #[test]
    fn test_report_contains_expected_sections() {
        let report = render_report(&worked_example());
        assert!(report.contains("Journey Cost"));
        assert!(report.contains("Cost Comparison"));
        assert!(report.contains("You Save"));
        assert!(report.contains("Electric"));
    }

    #[test]
    fn test_equal_totals_render_neutrally() {
        let outputs = FormSnapshot::new().recompute();
        assert!(savings_line(&outputs).is_none());
        let report = render_report(&outputs);
        assert!(report.contains("Both options cost the same"));
        assert!(!report.contains("Extra Cost"));
        assert!(!report.contains("You Save"));
    }

    #[test]
    fn test_diesel_win_renders_extra_cost() {
        // Cheap diesel, pricey electricity: sticking with electric costs more
        let mut form = FormSnapshot::new();
        form.set_distance("100");
        form.set_efficiency_mpg("70");
        form.set_price_per_litre("0.50");
        form.set_consumption_kwh_per_100km("25");
        let outputs = form.set_price_per_kwh("0.60");

        let line = savings_line(&outputs).expect("unequal totals must produce a line");
        assert!(line.starts_with("Extra Cost"), "unexpected line: {line}");
        assert!(line.contains('%'), "percentage missing: {line}");
        assert!(render_report(&outputs).contains("Extra Cost"));
    }
}
