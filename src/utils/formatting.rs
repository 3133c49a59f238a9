//! Formatting utilities used for CLI and export outputs.

/// Placeholder for undefined metrics (missing salary, no urgency...).
pub const UNDEFINED: &str = "--";

/// Fixed-decimals number.
pub fn fmt_num(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}

pub fn fmt_optional(v: Option<f64>, decimals: usize) -> String {
    v.map_or_else(|| UNDEFINED.to_string(), |x| fmt_num(x, decimals))
}

/// Salary in dollars with thousands separators: `$7,500`.
pub fn fmt_salary(v: Option<u64>) -> String {
    let Some(v) = v else {
        return UNDEFINED.to_string();
    };

    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

/// Round half away from zero to `decimals` places (export values).
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}
