//! Formatting helpers for list, marker, and export outputs.

use unicode_width::UnicodeWidthStr;

/// Plain number without trailing zeros ("5", "5.5").
pub fn num(v: f64) -> String {
    format!("{v}")
}

pub fn km(v: f64) -> String {
    format!("{} km", num(v))
}

pub fn minutes(v: f64) -> String {
    format!("{} min", num(v))
}

/// min/km, two decimals like the sidebar always showed it.
pub fn pace(v: f64) -> String {
    format!("{v:.2} min/km")
}

/// km/h, two decimals.
pub fn speed(v: f64) -> String {
    format!("{v:.2} km/h")
}

pub fn step_rate(v: f64) -> String {
    format!("{} steps/min", num(v))
}

pub fn elevation_gain(v: f64) -> String {
    format!("{} m climb", num(v))
}

/// Pad to a display width, not a char count: rows can contain emoji icons
/// that occupy two terminal cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - current))
    }
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
