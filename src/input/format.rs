/// Groups the card number into blocks of four: `4111111111111111` becomes
/// `4111 1111 1111 1111`.
pub fn format_card_number(raw: &str) -> String {
    let compact: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps digits and inserts the slash once the month is complete: `1226`
/// becomes `12/26`, extra digits are dropped.
pub fn format_expiry(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < 2 {
        return digits;
    }
    let year: String = digits[2..].chars().take(2).collect();
    format!("{}/{}", &digits[..2], year)
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
