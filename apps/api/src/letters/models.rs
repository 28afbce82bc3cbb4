use serde::{Deserialize, Serialize};

/// The four HR letters the service can draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterCategory {
    #[serde(alias = "Offer", alias = "Offer Letter")]
    Offer,
    #[serde(alias = "Appointment", alias = "Appointment Letter")]
    Appointment,
    #[serde(alias = "Relieving", alias = "Relieving Letter")]
    Relieving,
    #[serde(alias = "Experience", alias = "Experience Letter")]
    Experience,
}

impl LetterCategory {
    pub const ALL: [LetterCategory; 4] = [
        LetterCategory::Offer,
        LetterCategory::Appointment,
        LetterCategory::Relieving,
        LetterCategory::Experience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LetterCategory::Offer => "Offer Letter",
            LetterCategory::Appointment => "Appointment Letter",
            LetterCategory::Relieving => "Relieving Letter",
            LetterCategory::Experience => "Experience Letter",
        }
    }

    /// Relieving and experience letters describe a finished employment.
    pub fn is_exit_letter(self) -> bool {
        matches!(self, LetterCategory::Relieving | LetterCategory::Experience)
    }

    pub fn requires_last_working_day(self) -> bool {
        self.is_exit_letter()
    }

    pub fn requires_reporting_manager(self) -> bool {
        !self.is_exit_letter()
    }

    pub fn joining_date_label(self) -> &'static str {
        if self.is_exit_letter() {
            "Original Joining Date"
        } else {
            "Joining Date"
        }
    }

    /// Form fields (camelCase) that must be filled for this category.
    pub fn required_fields(self) -> Vec<&'static str> {
        let mut fields = vec!["name", "address", "position", "annualCtc", "joiningDate"];
        if self.requires_reporting_manager() {
            fields.push("reportingManager");
        }
        if self.requires_last_working_day() {
            fields.push("lastWorkingDay");
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: String,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default)]
    pub joining_date: String,
    pub reporting_manager: Option<String>,
    /// ISO date, `YYYY-MM-DD`. Exit letters only.
    pub last_working_day: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDetails {
    /// As typed, e.g. "5,00,000".
    #[serde(default, alias = "annualCTC")]
    pub annual_ctc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterRequest {
    pub letter_category: LetterCategory,
    #[serde(default)]
    pub candidate: CandidateDetails,
    #[serde(default)]
    pub salary: SalaryDetails,
}

impl CandidateDetails {
    /// Reporting manager, if present and not blank.
    pub fn reporting_manager(&self) -> Option<&str> {
        non_blank(self.reporting_manager.as_deref())
    }

    /// Last working day, if present and not blank.
    pub fn last_working_day(&self) -> Option<&str> {
        non_blank(self.last_working_day.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
