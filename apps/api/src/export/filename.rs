/// Builds `{DocumentType}_{PrimaryName}[_{Month}_{Year}].pdf`.
///
/// Every whitespace character in the document type and primary name becomes
/// `_` (runs are not collapsed). The period suffix is added only when both
/// month and year are non-blank.
pub fn pdf_file_name(document_type: &str, primary_name: &str, period: Option<(&str, &str)>) -> String {
    let mut name = format!(
        "{}_{}",
        underscore_whitespace(document_type.trim()),
        underscore_whitespace(primary_name.trim())
    );

    if let Some((month, year)) = period {
        let (month, year) = (month.trim(), year.trim());
        if !month.is_empty() && !year.is_empty() {
            name.push_str(&format!(
                "_{}_{}",
                underscore_whitespace(month),
                underscore_whitespace(year)
            ));
        }
    }

    name.push_str(".pdf");
    name
}

fn underscore_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
