use serde::{Deserialize, Serialize};

use crate::salary::models::{DeductionLineItems, EarningsLineItems, SalarySlipRecord};

/// Derived totals. Never stored; recomputed from the line items on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryTotals {
    pub total_earnings: f64,
    pub total_deductions: f64,
    /// May be negative; no clamping.
    pub net_salary: f64,
}

/// Sums both mappings and subtracts. No validation and no rounding: a zero or
/// negative line item is summed like any other value.
pub fn compute_totals(earnings: &EarningsLineItems, deductions: &DeductionLineItems) -> SalaryTotals {
    let total_earnings: f64 = earnings.values().iter().sum();
    let total_deductions: f64 = deductions.values().iter().sum();

    SalaryTotals {
        total_earnings,
        total_deductions,
        net_salary: total_earnings - total_deductions,
    }
}

impl SalarySlipRecord {
    pub fn totals(&self) -> SalaryTotals {
        compute_totals(&self.earnings, &self.deductions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_earnings() -> EarningsLineItems {
        EarningsLineItems {
            basic: 30000.0,
            house_rent_allowance: 12000.0,
            special_allowance: 5000.0,
        }
    }

    fn sample_deductions() -> DeductionLineItems {
        DeductionLineItems {
            provident_fund: 3600.0,
            professional_tax: 200.0,
            income_tax: 1500.0,
        }
    }

    #[test]
    fn test_sample_payslip_totals() {
        let totals = compute_totals(&sample_earnings(), &sample_deductions());
        assert_eq!(totals.total_earnings, 47000.0);
        assert_eq!(totals.total_deductions, 5300.0);
        assert_eq!(totals.net_salary, 41700.0);
    }

    #[test]
    fn test_reordering_line_items_does_not_change_totals() {
        let shuffled = EarningsLineItems {
            basic: 5000.0,
            house_rent_allowance: 30000.0,
            special_allowance: 12000.0,
        };
        let shuffled_deductions = DeductionLineItems {
            provident_fund: 1500.0,
            professional_tax: 3600.0,
            income_tax: 200.0,
        };
        assert_eq!(
            compute_totals(&sample_earnings(), &sample_deductions()),
            compute_totals(&shuffled, &shuffled_deductions)
        );
    }

    #[test]
    fn test_net_is_exact_difference() {
        let earnings = EarningsLineItems {
            basic: 25431.37,
            house_rent_allowance: 10172.55,
            special_allowance: 3333.33,
        };
        let deductions = DeductionLineItems {
            provident_fund: 3051.76,
            professional_tax: 200.0,
            income_tax: 912.4,
        };
        let totals = compute_totals(&earnings, &deductions);
        assert_eq!(totals.net_salary, totals.total_earnings - totals.total_deductions);
    }

    #[test]
    fn test_negative_net_is_not_clamped() {
        let earnings = EarningsLineItems {
            basic: 1000.0,
            ..Default::default()
        };
        let deductions = DeductionLineItems {
            income_tax: 1500.0,
            ..Default::default()
        };
        assert_eq!(compute_totals(&earnings, &deductions).net_salary, -500.0);
    }

    #[test]
    fn test_zero_and_negative_inputs_do_not_fail() {
        let earnings = EarningsLineItems {
            basic: -10.0,
            ..Default::default()
        };
        let totals = compute_totals(&earnings, &DeductionLineItems::default());
        assert_eq!(totals.total_earnings, -10.0);
        assert_eq!(totals.total_deductions, 0.0);
    }
}
