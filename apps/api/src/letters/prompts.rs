// All LLM prompt text for the Letters module.
// Templates use `{placeholder}` slots filled in one pass by `fill_template`,
// so values typed into the form are never re-expanded.

use crate::config::CompanyProfile;
use crate::letters::models::{LetterCategory, LetterRequest};
use crate::llm_client::prompts::HTML_FRAGMENT_INSTRUCTION;

/// Letter prompt template.
/// Replace: {company_name}, {company_cin}, {company_address}, {letter_type},
///          {html_instruction}, {candidate_lines}, {annual_ctc}, {checklist}
pub const LETTER_PROMPT_TEMPLATE: &str = r#"You are an expert HR Manager for '{company_name}'. Your task is to generate a formal and professional {letter_type}.
{html_instruction}

Company Details:
- Name: {company_name}
- CIN: {company_cin}
- Address: {company_address}

Candidate Details:
{candidate_lines}

Salary Details:
- Annual CTC: {annual_ctc} INR

---

Based on the details above, generate the full content for a professional {letter_type}.

{checklist}"#;

/// Replace: {position}, {annual_ctc}
pub const OFFER_CHECKLIST: &str = r#"The letter should include:
1. Introduction and formal offer for the position of {position}.
2. Compensation and Benefits, clearly stating the Annual CTC of {annual_ctc}.
3. Date of Joining and reporting details.
4. Key terms like a probation period (e.g., 6 months).
5. A section for the candidate to sign and accept the offer.
6. A warm and professional closing."#;

/// Replace: {name}, {position}, {annual_ctc}
pub const APPOINTMENT_CHECKLIST: &str = r#"This letter confirms the appointment of {name}. It should be more detailed than the offer letter. Include:
1. Confirmation of appointment to the role of {position}.
2. Detailed salary breakdown (You can create a sample breakdown based on the CTC of {annual_ctc}).
3. Detailed terms and conditions of employment (probation, notice period, confidentiality, code of conduct).
4. Job responsibilities and duties.
5. A professional closing."#;

/// Replace: {name}, {position}, {last_working_day}
pub const RELIEVING_CHECKLIST: &str = r#"This letter is to certify that {name} has been relieved from their duties as {position}. Include:
1. Acceptance of the employee's resignation.
2. The employee's designation at the time of leaving.
3. The effective date of relieving / last working day: {last_working_day}.
4. A statement wishing the employee well for their future endeavors.
5. Mention that final settlement will be processed as per company policy."#;

/// Replace: {name}, {position}, {joining_date}, {last_working_day}
pub const EXPERIENCE_CHECKLIST: &str = r#"This is to certify that {name} was employed with us. The letter must contain:
1. The duration of employment, from {joining_date} to {last_working_day}.
2. The designation held by the employee at the time of leaving ({position}).
3. A brief, positive note on their conduct and performance (e.g., "was found to be sincere and hardworking").
4. A wish for success in their future career."#;

/// Assembles the instruction block sent to the text generator. Pure: same
/// company and request always produce the same prompt.
pub fn build_prompt(company: &CompanyProfile, request: &LetterRequest) -> String {
    let category = request.letter_category;
    let candidate = &request.candidate;
    let annual_ctc = request.salary.annual_ctc.trim();
    let last_working_day = candidate.last_working_day().unwrap_or_default();

    let checklist_values = [
        ("name", candidate.name.trim()),
        ("position", candidate.position.trim()),
        ("annual_ctc", annual_ctc),
        ("joining_date", candidate.joining_date.trim()),
        ("last_working_day", last_working_day),
    ];
    let checklist = fill_template(checklist_for(category), &checklist_values);
    let candidate_lines = candidate_lines(request);

    fill_template(
        LETTER_PROMPT_TEMPLATE,
        &[
            ("company_name", company.name.as_str()),
            ("company_cin", company.cin.as_str()),
            ("company_address", company.address.as_str()),
            ("letter_type", category.label()),
            ("html_instruction", HTML_FRAGMENT_INSTRUCTION),
            ("candidate_lines", candidate_lines.as_str()),
            ("annual_ctc", annual_ctc),
            ("checklist", checklist.as_str()),
        ],
    )
}

fn checklist_for(category: LetterCategory) -> &'static str {
    match category {
        LetterCategory::Offer => OFFER_CHECKLIST,
        LetterCategory::Appointment => APPOINTMENT_CHECKLIST,
        LetterCategory::Relieving => RELIEVING_CHECKLIST,
        LetterCategory::Experience => EXPERIENCE_CHECKLIST,
    }
}

/// Candidate block. Exit letters carry the last working day and never the
/// reporting manager; offer and appointment letters the reverse.
fn candidate_lines(request: &LetterRequest) -> String {
    let category = request.letter_category;
    let candidate = &request.candidate;

    let joining_label = if category.is_exit_letter() {
        "Original Date of Joining"
    } else {
        "Date of Joining"
    };

    let mut lines = vec![
        format!("- Name: {}", candidate.name.trim()),
        format!("- Address: {}", candidate.address.trim()),
        format!("- Position: {}", candidate.position.trim()),
        format!("- {joining_label}: {}", candidate.joining_date.trim()),
    ];

    if category.requires_last_working_day() {
        if let Some(day) = candidate.last_working_day() {
            lines.push(format!("- Last Working Day: {day}"));
        }
    }
    if category.requires_reporting_manager() {
        if let Some(manager) = candidate.reporting_manager() {
            lines.push(format!("- Reporting Manager: {manager}"));
        }
    }

    lines.join("\n")
}

/// Single-pass `{key}` substitution. Unknown keys and stray braces are kept
/// verbatim; substituted values are not scanned again.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
