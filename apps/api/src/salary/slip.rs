//! Salary slip document: the printable view of one `SalarySlipRecord`.

use serde::Serialize;

use crate::config::CompanyProfile;
use crate::salary::currency::format_currency;
use crate::salary::models::{DeductionField, EarningsField, SalarySlipRecord};
use crate::salary::totals::SalaryTotals;
use crate::salary::words::number_to_words;

pub const SLIP_FOOTER: &str =
    "This is a computer-generated salary slip and does not require a signature.";

const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRow {
    pub label: &'static str,
    pub value: String,
}

/// One table row: an earning paired with the deduction at the same position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRow {
    pub earning_label: &'static str,
    pub earning_amount: String,
    pub deduction_label: &'static str,
    pub deduction_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlipDocument {
    pub title: String,
    pub company_name: String,
    pub company_address: String,
    pub identity: Vec<IdentityRow>,
    pub rows: Vec<LineItemRow>,
    pub total_earnings: String,
    pub total_deductions: String,
    pub net_salary: String,
    pub amount_in_words: String,
    pub footer: &'static str,
}

/// "{words} Rupees Only", or empty when the amount has no words rendition.
pub fn amount_in_words_line(amount: f64) -> String {
    let words = number_to_words(amount);
    if words.is_empty() {
        String::new()
    } else {
        format!("{words} Rupees Only")
    }
}

impl SalarySlipDocument {
    pub fn build(company: &CompanyProfile, record: &SalarySlipRecord) -> Self {
        let totals: SalaryTotals = record.totals();

        let identity = vec![
            identity_row("Employee Name", &record.employee_name),
            identity_row("Employee ID", &record.employee_id),
            identity_row("Designation", &record.designation),
        ];

        let rows = EarningsField::ALL
            .iter()
            .zip(DeductionField::ALL.iter())
            .map(|(&earning, &deduction)| LineItemRow {
                earning_label: earning.label(),
                earning_amount: format_currency(record.earnings.get(earning)),
                deduction_label: deduction.label(),
                deduction_amount: format_currency(record.deductions.get(deduction)),
            })
            .collect();

        Self {
            title: format!("Salary Slip for {} {}", record.month.trim(), record.year.trim()),
            company_name: company.name.clone(),
            company_address: company.address.clone(),
            identity,
            rows,
            total_earnings: format_currency(totals.total_earnings),
            total_deductions: format_currency(totals.total_deductions),
            net_salary: format_currency(totals.net_salary),
            amount_in_words: amount_in_words_line(totals.net_salary),
            footer: SLIP_FOOTER,
        }
    }

    /// Renders the slip as a self-contained HTML fragment. Every interpolated
    /// value is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<div class=\"salary-slip\">\n");
        html.push_str("  <header>\n");
        html.push_str(&format!("    <h2>{}</h2>\n", escape_html(&self.company_name)));
        html.push_str(&format!("    <p>{}</p>\n", escape_html(&self.company_address)));
        html.push_str(&format!("    <h3>{}</h3>\n", escape_html(&self.title)));
        html.push_str("  </header>\n");

        html.push_str("  <dl class=\"identity\">\n");
        for row in &self.identity {
            html.push_str(&format!(
                "    <dt>{}:</dt><dd>{}</dd>\n",
                row.label,
                escape_html(&row.value)
            ));
        }
        html.push_str("  </dl>\n");

        html.push_str("  <table>\n");
        html.push_str(
            "    <thead><tr><th>Earnings</th><th>Amount (INR)</th><th>Deductions</th><th>Amount (INR)</th></tr></thead>\n",
        );
        html.push_str("    <tbody>\n");
        for row in &self.rows {
            html.push_str(&format!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                row.earning_label, row.earning_amount, row.deduction_label, row.deduction_amount
            ));
        }
        html.push_str(&format!(
            "      <tr class=\"totals\"><td>Total Earnings</td><td>{}</td><td>Total Deductions</td><td>{}</td></tr>\n",
            self.total_earnings, self.total_deductions
        ));
        html.push_str("    </tbody>\n");
        html.push_str("  </table>\n");

        html.push_str(&format!(
            "  <div class=\"net-salary\"><span>Net Salary</span><span>{}</span></div>\n",
            self.net_salary
        ));
        html.push_str(&format!(
            "  <p class=\"in-words\"><strong>In Words:</strong> {}</p>\n",
            escape_html(&self.amount_in_words)
        ));
        html.push_str(&format!("  <footer><p>{}</p></footer>\n", self.footer));
        html.push_str("</div>\n");

        html
    }
}

fn identity_row(label: &'static str, value: &str) -> IdentityRow {
    let value = value.trim();
    IdentityRow {
        label,
        value: if value.is_empty() {
            MISSING_VALUE.to_string()
        } else {
            value.to_string()
        },
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
