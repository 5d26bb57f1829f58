//! Pure ROI calculator.
//!
//! Total function over validated inputs: every well-formed
//! [`SimulationInputs`] produces a [`SimulationResult`].

use super::model::{SimulationInputs, SimulationResult};

/// Fixed multiplier applied to raw monthly savings to model an assumed
/// incremental efficiency gain.
pub const BOOST_FACTOR: f64 = 1.1;

/// Round at the output boundary; internal arithmetic keeps full precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the projection for one set of inputs.
///
/// Payback and ROI exist only when an implementation cost is present and
/// monthly savings are positive; ROI additionally requires a non-zero
/// implementation cost (a zero cost would make the percentage a division
/// by zero, so it stays absent rather than infinite).
#[must_use]
pub fn calculate(inputs: &SimulationInputs) -> SimulationResult {
    let base_savings = inputs.labor_cost_manual + inputs.error_savings - inputs.auto_cost;
    let monthly_savings = base_savings * BOOST_FACTOR;

    let mut payback_months = None;
    let mut roi_percentage = None;

    if let Some(implementation_cost) = inputs.implementation_cost {
        if monthly_savings > 0.0 {
            payback_months = Some(implementation_cost / monthly_savings);
            if implementation_cost > 0.0 {
                // Annualized ROI relative to implementation cost
                roi_percentage = Some(
                    ((monthly_savings * 12.0) - implementation_cost) / implementation_cost * 100.0,
                );
            }
        }
    }

    SimulationResult {
        monthly_savings: round2(monthly_savings),
        payback_months: payback_months.map(round2),
        roi_percentage: roi_percentage.map(round2),
        boost_factor: BOOST_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(labor: f64, errors: f64, auto: f64, implementation: Option<f64>) -> SimulationInputs {
        SimulationInputs {
            labor_cost_manual: labor,
            error_savings: errors,
            auto_cost: auto,
            implementation_cost: implementation,
        }
    }

    #[test]
    fn worked_example_from_the_product_sheet() {
        let result = calculate(&inputs(1000.0, 200.0, 300.0, Some(1000.0)));
        assert_eq!(result.monthly_savings, 990.0);
        assert_eq!(result.payback_months, Some(1.01));
        assert_eq!(result.roi_percentage, Some(1088.0));
        assert_eq!(result.boost_factor, BOOST_FACTOR);
    }

    #[test]
    fn monthly_savings_formula_holds() {
        let result = calculate(&inputs(1234.56, 78.9, 1000.0, None));
        let expected = ((1234.56 + 78.9 - 1000.0) * BOOST_FACTOR * 100.0).round() / 100.0;
        assert_eq!(result.monthly_savings, expected);
    }

    #[test]
    fn absent_implementation_cost_leaves_payback_and_roi_absent() {
        let result = calculate(&inputs(1000.0, 200.0, 300.0, None));
        assert_eq!(result.payback_months, None);
        assert_eq!(result.roi_percentage, None);
    }

    #[test]
    fn negative_base_savings_leaves_payback_and_roi_absent() {
        let result = calculate(&inputs(100.0, 50.0, 500.0, Some(1000.0)));
        assert!(result.monthly_savings < 0.0);
        assert_eq!(result.payback_months, None);
        assert_eq!(result.roi_percentage, None);
    }

    #[test]
    fn zero_monthly_savings_leaves_payback_and_roi_absent() {
        let result = calculate(&inputs(100.0, 100.0, 200.0, Some(1000.0)));
        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.payback_months, None);
        assert_eq!(result.roi_percentage, None);
    }

    #[test]
    fn zero_implementation_cost_gives_zero_payback_and_absent_roi() {
        let result = calculate(&inputs(1000.0, 200.0, 300.0, Some(0.0)));
        assert_eq!(result.payback_months, Some(0.0));
        assert_eq!(result.roi_percentage, None);
    }

    #[test]
    fn results_round_to_two_decimals() {
        // 10 + 0.33 - 0 = 10.33; * 1.1 = 11.363
        let result = calculate(&inputs(10.0, 0.33, 0.0, Some(100.0)));
        assert_eq!(result.monthly_savings, 11.36);
        // 100 / 11.363 = 8.8004...
        assert_eq!(result.payback_months, Some(8.8));
    }

    #[test]
    fn calculation_is_deterministic() {
        let i = inputs(42.0, 7.0, 11.0, Some(99.0));
        assert_eq!(calculate(&i), calculate(&i));
    }
}
