use crate::errors::FieldErrors;
use crate::salary::models::{DeductionField, EarningsField, SalarySlipRecord};

const MAX_TEXT_LEN: usize = 100;
const MAX_EMPLOYEE_ID_LEN: usize = 30;

/// Checks a salary slip before computing or exporting it.
/// Collects every failing field instead of stopping at the first.
pub fn validate_slip(record: &SalarySlipRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    require_text(&mut errors, "employeeName", "Employee name", &record.employee_name, MAX_TEXT_LEN);
    require_text(
        &mut errors,
        "employeeId",
        "Employee ID",
        &record.employee_id,
        MAX_EMPLOYEE_ID_LEN,
    );
    require_text(&mut errors, "designation", "Designation", &record.designation, MAX_TEXT_LEN);
    require_text(&mut errors, "month", "Salary month", &record.month, MAX_TEXT_LEN);

    let year = record.year.trim();
    if year.is_empty() {
        errors.add("year", "Salary year is required");
    } else if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        errors.add("year", "Salary year must be a 4-digit year");
    }

    for field in EarningsField::ALL {
        check_amount(&mut errors, field.key(), field.label(), record.earnings.get(field));
    }
    for field in DeductionField::ALL {
        check_amount(&mut errors, field.key(), field.label(), record.deductions.get(field));
    }

    errors.into_result()
}

fn require_text(errors: &mut FieldErrors, field: &str, label: &str, value: &str, max_len: usize) {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{label} is required"));
    } else if value.chars().count() > max_len {
        errors.add(field, format!("{label} must be at most {max_len} characters"));
    }
}

fn check_amount(errors: &mut FieldErrors, field: &str, label: &str, amount: f64) {
    if !amount.is_finite() {
        errors.add(field, format!("{label} must be a number"));
    } else if amount < 0.0 {
        errors.add(field, format!("{label} cannot be negative"));
    }
}
