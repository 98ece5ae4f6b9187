//! Number formatting for tooltips and SVG attributes.

/// Unit appended to every flow value.
pub const UNIT: &str = "TWh";

/// Rounds to the nearest integer (half away from zero) and groups thousands
/// with commas.
pub fn format_number(value: f64) -> String {
	if !value.is_finite() {
		return "0".to_string();
	}
	let rounded = value.round();
	let digits = format!("{:.0}", rounded.abs());

	let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if rounded < 0.0 {
		out.push('-');
	}
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// `format_number` followed by the unit label.
pub fn format_value(value: f64) -> String {
	format!("{} {UNIT}", format_number(value))
}

/// Tooltip text for a link.
pub fn link_title(source: &str, target: &str, value: f64) -> String {
	format!("{source} → {target}\n{}", format_value(value))
}

/// Tooltip text for a node.
pub fn node_title(name: &str, value: f64) -> String {
	format!("{name}\n{}", format_value(value))
}

/// SVG number formatting: integral values print without a fraction, noise
/// below 1e-9 collapses to zero, and `-0` never appears.
pub fn fmt(v: f64) -> String {
	if !v.is_finite() {
		return "0".to_string();
	}
	let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
	let nearest = v.round();
	if (v - nearest).abs() < 1e-6 {
		v = nearest;
	}
	let s = v.to_string();
	if s == "-0" { "0".to_string() } else { s }
}
