use clap::ValueEnum;
use serde::Deserialize;

use crate::geometry::Triangle;

/// Turns a list of triangles into test file text
pub trait CaseFormat {
    fn render(&self, triangles: &[Triangle]) -> String;
}

/// Format a coordinate the way the legacy generator printed floats.
///
/// Shortest round-trip digits, always with a fractional part (`3.0`, not
/// `3`), switching to exponent form (`1e+16`, `1.5e-07`) when the decimal
/// point would sit more than 16 digits left or 4 zeros right of the digits.
pub fn format_coord(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest digits as `d.ddde<exp>`
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let point = exp + 1;

    if point > -4 && point <= 16 {
        let body = if point <= 0 {
            format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
        } else {
            let point = point as usize;
            if point >= digits.len() {
                format!("{}{}.0", digits, "0".repeat(point - digits.len()))
            } else {
                format!("{}.{}", &digits[..point], &digits[point..])
            }
        };
        format!("{sign}{body}")
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exp.unsigned_abs())
    }
}

/// Legacy layout: each vertex written as `x y z` with nothing between
/// vertices or triangles, so `1.0 2.0 3.0` followed by `4.0 5.0 6.0` becomes
/// `1.0 2.0 3.04.0 5.0 6.0`. Existing consumers of the generated files
/// expect this text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concatenated;

impl CaseFormat for Concatenated {
    fn render(&self, triangles: &[Triangle]) -> String {
        let mut out = String::new();
        for tri in triangles {
            for v in &tri.vertices {
                out.push_str(&format!(
                    "{} {} {}",
                    format_coord(v.x),
                    format_coord(v.y),
                    format_coord(v.z)
                ));
            }
        }
        out
    }
}

/// Every coordinate separated by a space, one triangle per line
#[derive(Debug, Clone, Copy, Default)]
pub struct Spaced;

impl CaseFormat for Spaced {
    fn render(&self, triangles: &[Triangle]) -> String {
        let mut out = String::new();
        for tri in triangles {
            let line: Vec<String> = tri.coords().map(format_coord).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Selectable output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Concatenated,
    Spaced,
}

impl CaseFormat for FormatKind {
    fn render(&self, triangles: &[Triangle]) -> String {
        match self {
            FormatKind::Concatenated => Concatenated.render(triangles),
            FormatKind::Spaced => Spaced.render(triangles),
        }
    }
}
