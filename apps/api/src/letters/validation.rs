use chrono::NaiveDate;

use crate::errors::FieldErrors;
use crate::letters::models::LetterRequest;

const MAX_NAME_LEN: usize = 100;
const MAX_POSITION_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 300;
const MAX_CTC_LEN: usize = 20;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a letter request before any prompt is built.
///
/// Conditional rules:
/// - offer / appointment: reporting manager required
/// - relieving / experience: last working day required, not before joining
pub fn validate_letter(request: &LetterRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let category = request.letter_category;
    let candidate = &request.candidate;

    require_text(&mut errors, "name", "Candidate name", &candidate.name, MAX_NAME_LEN);
    require_text(&mut errors, "address", "Candidate address", &candidate.address, MAX_ADDRESS_LEN);
    require_text(&mut errors, "position", "Position", &candidate.position, MAX_POSITION_LEN);

    let ctc = request.salary.annual_ctc.trim();
    if ctc.is_empty() {
        errors.add("annualCtc", "Annual CTC is required");
    } else if ctc.chars().count() > MAX_CTC_LEN {
        errors.add("annualCtc", format!("Annual CTC must be at most {MAX_CTC_LEN} characters"));
    } else {
        match parse_ctc(ctc) {
            Some(amount) if amount > 0.0 => {}
            Some(_) => errors.add("annualCtc", "Annual CTC must be greater than zero"),
            None => errors.add("annualCtc", "Annual CTC must be a number, e.g. 5,00,000"),
        }
    }

    let joining_label = category.joining_date_label();
    let joining = parse_date_field(&mut errors, "joiningDate", joining_label, &candidate.joining_date);

    if category.requires_reporting_manager() {
        match candidate.reporting_manager() {
            None => errors.add("reportingManager", "Reporting manager is required"),
            Some(manager) if manager.chars().count() > MAX_NAME_LEN => errors.add(
                "reportingManager",
                format!("Reporting manager must be at most {MAX_NAME_LEN} characters"),
            ),
            Some(_) => {}
        }
    }

    if category.requires_last_working_day() {
        let last_day = parse_date_field(
            &mut errors,
            "lastWorkingDay",
            "Last working day",
            candidate.last_working_day().unwrap_or_default(),
        );
        if let (Some(joining), Some(last_day)) = (joining, last_day) {
            if last_day < joining {
                errors.add(
                    "lastWorkingDay",
                    format!("Last working day cannot be before the {}", joining_label.to_lowercase()),
                );
            }
        }
    }

    errors.into_result()
}

/// Parses an annual CTC as typed: Indian or western grouping commas and spaces
/// are ignored.
pub fn parse_ctc(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn require_text(errors: &mut FieldErrors, field: &str, label: &str, value: &str, max_len: usize) {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{label} is required"));
    } else if value.chars().count() > max_len {
        errors.add(field, format!("{label} must be at most {max_len} characters"));
    }
}

fn parse_date_field(errors: &mut FieldErrors, field: &str, label: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, format!("{label} is required"));
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, format!("{label} must be a date in YYYY-MM-DD format"));
            None
        }
    }
}
