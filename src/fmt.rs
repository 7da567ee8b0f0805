/// Insert thousands separators into a run of ASCII digits: "1234567" -> "1,234,567".
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a dollar amount with separators: $1,234.56
pub fn money(val: f64) -> String {
    let cents = format!("{:.2}", val.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let sign = if val < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac}", group_digits(whole))
}

/// Format a row count with separators: 1,834,012
pub fn count(n: usize) -> String {
    group_digits(&n.to_string())
}
