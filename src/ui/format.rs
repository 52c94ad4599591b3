//! Number formatting for the dashboard cells.

/// Group the integer part with `sep` and render `decimals` digits after `dec`.
fn grouped(value: f64, decimals: usize, sep: char, dec: char) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(dec);
        out.push_str(frac);
    }
    out
}

/// pt-BR style: `152750.0` -> `152.750,00`.
pub fn format_brl_amount(value: f64) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }
    grouped(value, 2, '.', ',')
}

/// `1500` -> `1,500`.
pub fn format_shares(shares: u64) -> String {
    grouped(shares as f64, 0, ',', '.')
}

pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }
    format!("{:.2}", value)
}

pub fn format_signed_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:+.2}%", v),
        _ => "--".to_string(),
    }
}

/// Compact magnitude with K/M/B suffix: `15_230_000` -> `15.2M`.
pub fn format_compact(value: u64) -> String {
    let v = value as f64;
    if v >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if v >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if v >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        value.to_string()
    }
}
