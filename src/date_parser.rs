/// Normalise the digits of a PDF date (`D:YYYYMMDDHHmmSS...`, prefix already
/// removed) to `YYYY-MM-DD HH:MM:SS`.
///
/// Only the leading run of ASCII digits is considered. At least eight digits
/// (the date part) are required; missing hour, minute or second default to
/// `00`. Components are copied as-is, so an out-of-range month or day passes
/// through, and any timezone suffix is ignored.
///
/// ```
/// # use pdfsigscan::parse_pdf_date;
/// assert_eq!(parse_pdf_date("20250315120000").as_deref(), Some("2025-03-15 12:00:00"));
/// assert_eq!(parse_pdf_date("2025031512").as_deref(), Some("2025-03-15 12:00:00"));
/// assert_eq!(parse_pdf_date("202503"), None);
/// ```
pub fn parse_pdf_date(digits: &str) -> Option<String> {
    let run = digits
        .find(|c: char| !c.is_ascii_digit())
        .map_or(digits, |end| &digits[..end]);

    if run.len() < 8 {
        return None;
    }

    // `run` is pure ASCII, so byte slicing never splits a character.
    let field = |start: usize| run.get(start..start + 2).unwrap_or("00");

    Some(format!(
        "{}-{}-{} {}:{}:{}",
        &run[0..4],
        &run[4..6],
        &run[6..8],
        field(8),
        field(10),
        field(12),
    ))
}
