#![allow(dead_code)]
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Line items
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-shape earnings. Field order is the display order on the slip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EarningsLineItems {
    #[serde(deserialize_with = "deserialize_amount")]
    pub basic: f64,
    #[serde(alias = "hra", deserialize_with = "deserialize_amount")]
    pub house_rent_allowance: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub special_allowance: f64,
}

/// Fixed-shape deductions. Field order is the display order on the slip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeductionLineItems {
    #[serde(alias = "pf", deserialize_with = "deserialize_amount")]
    pub provident_fund: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub professional_tax: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub income_tax: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EarningsField {
    Basic,
    HouseRentAllowance,
    SpecialAllowance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeductionField {
    ProvidentFund,
    ProfessionalTax,
    IncomeTax,
}

impl EarningsField {
    pub const ALL: [EarningsField; 3] = [
        EarningsField::Basic,
        EarningsField::HouseRentAllowance,
        EarningsField::SpecialAllowance,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EarningsField::Basic => "basic",
            EarningsField::HouseRentAllowance => "houseRentAllowance",
            EarningsField::SpecialAllowance => "specialAllowance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EarningsField::Basic => "Basic Salary",
            EarningsField::HouseRentAllowance => "House Rent Allowance (HRA)",
            EarningsField::SpecialAllowance => "Special Allowance",
        }
    }
}

impl DeductionField {
    pub const ALL: [DeductionField; 3] = [
        DeductionField::ProvidentFund,
        DeductionField::ProfessionalTax,
        DeductionField::IncomeTax,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DeductionField::ProvidentFund => "providentFund",
            DeductionField::ProfessionalTax => "professionalTax",
            DeductionField::IncomeTax => "incomeTax",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeductionField::ProvidentFund => "Provident Fund (PF)",
            DeductionField::ProfessionalTax => "Professional Tax",
            DeductionField::IncomeTax => "Income Tax (TDS)",
        }
    }
}

impl EarningsLineItems {
    pub fn get(&self, field: EarningsField) -> f64 {
        match field {
            EarningsField::Basic => self.basic,
            EarningsField::HouseRentAllowance => self.house_rent_allowance,
            EarningsField::SpecialAllowance => self.special_allowance,
        }
    }

    /// Amounts in display order.
    pub fn values(&self) -> [f64; 3] {
        EarningsField::ALL.map(|field| self.get(field))
    }

    pub fn with(mut self, field: EarningsField, amount: f64) -> Self {
        match field {
            EarningsField::Basic => self.basic = amount,
            EarningsField::HouseRentAllowance => self.house_rent_allowance = amount,
            EarningsField::SpecialAllowance => self.special_allowance = amount,
        }
        self
    }
}

impl DeductionLineItems {
    pub fn get(&self, field: DeductionField) -> f64 {
        match field {
            DeductionField::ProvidentFund => self.provident_fund,
            DeductionField::ProfessionalTax => self.professional_tax,
            DeductionField::IncomeTax => self.income_tax,
        }
    }

    /// Amounts in display order.
    pub fn values(&self) -> [f64; 3] {
        DeductionField::ALL.map(|field| self.get(field))
    }

    pub fn with(mut self, field: DeductionField, amount: f64) -> Self {
        match field {
            DeductionField::ProvidentFund => self.provident_fund = amount,
            DeductionField::ProfessionalTax => self.professional_tax = amount,
            DeductionField::IncomeTax => self.income_tax = amount,
        }
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Salary slip record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlipRecord {
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub designation: String,
    /// Free text, e.g. "July".
    #[serde(default)]
    pub month: String,
    /// Four-digit year as typed, e.g. "2024".
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub earnings: EarningsLineItems,
    #[serde(default)]
    pub deductions: DeductionLineItems,
}

/// Text fields of the record that are edited as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityField {
    EmployeeName,
    EmployeeId,
    Designation,
    Month,
    Year,
}

impl SalarySlipRecord {
    /// Blank record for the month containing `date`; every amount is zero.
    pub fn blank_for(date: NaiveDate) -> Self {
        Self {
            employee_name: String::new(),
            employee_id: String::new(),
            designation: String::new(),
            month: date.format("%B").to_string(),
            year: date.year().to_string(),
            earnings: EarningsLineItems::default(),
            deductions: DeductionLineItems::default(),
        }
    }

    pub fn for_current_month() -> Self {
        Self::blank_for(Local::now().date_naive())
    }

    pub fn with_identity(mut self, field: IdentityField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            IdentityField::EmployeeName => self.employee_name = value,
            IdentityField::EmployeeId => self.employee_id = value,
            IdentityField::Designation => self.designation = value,
            IdentityField::Month => self.month = value,
            IdentityField::Year => self.year = value,
        }
        self
    }

    pub fn with_earning(mut self, field: EarningsField, amount: f64) -> Self {
        self.earnings = self.earnings.with(field, amount);
        self
    }

    pub fn with_deduction(mut self, field: DeductionField, amount: f64) -> Self {
        self.deductions = self.deductions.with(field, amount);
        self
    }
}

/// Parses raw numeric form input. Empty, unparsable or non-finite text becomes 0.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// A line item as sent by a form: a JSON number, numeric text, or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(amount)) => amount,
        Some(RawAmount::Text(raw)) => parse_amount(&raw),
        None => 0.0,
    })
}
