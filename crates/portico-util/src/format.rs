//! Input formatting helpers

/// Format a phone number as `XXX-XXX-XXXX` while it is being typed.
///
/// Non-digits are stripped first. Fewer than four digits are returned as-is,
/// fewer than seven get a single dash, and anything longer is truncated to
/// ten digits and fully formatted.
pub fn format_phone_num(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return digits;
    }

    if digits.len() < 7 {
        return format!("{}-{}", &digits[..3], &digits[3..]);
    }

    let digits = &digits[..digits.len().min(10)];
    format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Mask a ZIP code as `XXXXX` or `XXXXX-XXXX`.
///
/// Non-digits are stripped and the result is truncated to `max` digits
/// (default 9, the ZIP+4 length).
pub fn format_zip_code(input: &str, max: Option<usize>) -> String {
    let max = max.unwrap_or(9);
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect();

    if digits.len() <= 5 {
        return digits;
    }

    format!("{}-{}", &digits[..5], &digits[5..])
}

/// Uppercase the first letter of each whitespace-separated word, lowercasing
/// the rest.
pub fn capitalize(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a page title from the last segment of a path, e.g.
/// `/reports/monthly-summary` becomes `Monthly Summary | <site>`.
pub fn page_title(path: &str, site: &str) -> String {
    let page = path.rsplit('/').next().unwrap_or("").replace('-', " ");
    format!("{} | {}", capitalize(&page), site)
}
