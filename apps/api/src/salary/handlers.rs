//! Axum route handlers for the Salary Slip API.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::export::pdf_file_name;
use crate::salary::currency::format_currency;
use crate::salary::models::SalarySlipRecord;
use crate::salary::slip::{amount_in_words_line, SalarySlipDocument};
use crate::salary::totals::SalaryTotals;
use crate::salary::validation::validate_slip;
use crate::salary::words::number_to_words;
use crate::state::AppState;

const DOCUMENT_TYPE: &str = "Salary Slip";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub total_earnings: String,
    pub total_deductions: String,
    pub net_salary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub totals: SalaryTotals,
    pub formatted: FormattedTotals,
    pub net_salary_in_words: String,
    pub amount_in_words: String,
    pub file_name: String,
}

/// GET /api/v1/salary-slips/template
///
/// Blank record for the current month and year.
pub async fn handle_slip_template() -> Json<SalarySlipRecord> {
    Json(SalarySlipRecord::for_current_month())
}

/// POST /api/v1/salary-slips/compute
pub async fn handle_compute_slip(
    Json(record): Json<SalarySlipRecord>,
) -> Result<Json<ComputeResponse>, AppError> {
    validate_slip(&record)?;

    let totals = record.totals();
    let file_name = pdf_file_name(
        DOCUMENT_TYPE,
        &record.employee_name,
        Some((record.month.as_str(), record.year.as_str())),
    );

    Ok(Json(ComputeResponse {
        formatted: FormattedTotals {
            total_earnings: format_currency(totals.total_earnings),
            total_deductions: format_currency(totals.total_deductions),
            net_salary: format_currency(totals.net_salary),
        },
        net_salary_in_words: number_to_words(totals.net_salary),
        amount_in_words: amount_in_words_line(totals.net_salary),
        totals,
        file_name,
    }))
}

/// POST /api/v1/salary-slips/preview
///
/// Full salary slip as an HTML fragment, ready to be captured for export.
pub async fn handle_preview_slip(
    State(state): State<AppState>,
    Json(record): Json<SalarySlipRecord>,
) -> Result<Html<String>, AppError> {
    validate_slip(&record)?;
    let document = SalarySlipDocument::build(&state.company, &record);
    Ok(Html(document.to_html()))
}
