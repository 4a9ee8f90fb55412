/// Format a ruble amount the way ru-RU locales print it: `₽8 500 000`,
/// grouped with NBSP, comma decimals, at most two fraction digits.
pub fn money(amount: f64) -> String {
    if !amount.is_finite() {
        return "₽—".to_string();
    }

    let scaled = (amount.abs() * 100.0).round();
    if scaled >= u64::MAX as f64 {
        return "₽—".to_string();
    }
    let kopecks = scaled as u64;
    let whole = kopecks / 100;
    let fraction = kopecks % 100;

    let mut out = String::new();
    if amount < 0.0 && kopecks > 0 {
        out.push('-');
    }
    out.push('₽');
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(",{}", fraction / 10));
        } else {
            out.push_str(&format!(",{:02}", fraction));
        }
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}
