// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// An amount of money, given either as a number or as text holding one
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Amount<'a> {
	Number(f64),
	Text(&'a str),
}

impl Amount<'_> {
	/// The numeric value of the amount. Text with no numeric prefix is NaN.
	pub fn value(&self) -> f64 {
		match self {
			Self::Number(value) => *value,
			Self::Text(text) => {
				let value = parse_amount(text);
				if value.is_nan() {
					tracing::debug!(input = *text, "Amount text has no numeric prefix");
				}
				value
			}
		}
	}
}

impl From<f64> for Amount<'_> {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<f32> for Amount<'_> {
	fn from(value: f32) -> Self {
		Self::Number(value.into())
	}
}

impl From<i32> for Amount<'_> {
	fn from(value: i32) -> Self {
		Self::Number(value.into())
	}
}

impl From<u32> for Amount<'_> {
	fn from(value: u32) -> Self {
		Self::Number(value.into())
	}
}

impl From<i64> for Amount<'_> {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<u64> for Amount<'_> {
	fn from(value: u64) -> Self {
		Self::Number(value as f64)
	}
}

impl<'a> From<&'a str> for Amount<'a> {
	fn from(text: &'a str) -> Self {
		Self::Text(text)
	}
}

impl<'a> From<&'a String> for Amount<'a> {
	fn from(text: &'a String) -> Self {
		Self::Text(text.as_str())
	}
}

/// Reads the longest decimal number at the start of `text`.
///
/// Leading whitespace is skipped. The number may have a sign, a fraction, and an exponent, or be `Infinity`.
/// Anything after the number is ignored. Returns NaN if no number starts the text.
pub fn parse_amount(text: &str) -> f64 {
	let text = text.trim_start_matches(is_leading_space);
	let bytes = text.as_bytes();

	let mut end = 0;
	if matches!(bytes.first(), Some(b'+' | b'-')) {
		end += 1;
	}

	if text[end..].starts_with("Infinity") {
		let infinity = if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
		return infinity;
	}

	let integer_digits = count_digits(&bytes[end..]);
	end += integer_digits;

	let mut fraction_digits = 0;
	if bytes.get(end) == Some(&b'.') {
		fraction_digits = count_digits(&bytes[end + 1..]);
		if integer_digits > 0 || fraction_digits > 0 {
			end += 1 + fraction_digits;
		}
	}

	if integer_digits == 0 && fraction_digits == 0 {
		return f64::NAN;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exponent_end = end + 1;
		if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
			exponent_end += 1;
		}
		let exponent_digits = count_digits(&bytes[exponent_end..]);
		if exponent_digits > 0 {
			end = exponent_end + exponent_digits;
		}
	}

	text[..end].parse().unwrap_or(f64::NAN)
}

/// Whitespace skipped before a number: line breaks, tabs, the byte order mark, and space separators. Unlike
/// `char::is_whitespace`, U+0085 (next line) is not included.
fn is_leading_space(c: char) -> bool {
	matches!(
		c,
		'\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' ' | '\u{00A0}' | '\u{1680}'
			| '\u{2000}'..='\u{200A}'
			| '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
	)
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_plain_numbers() {
		assert_eq!(parse_amount("1000"), 1000.0);
		assert_eq!(parse_amount("1500.50"), 1500.5);
		assert_eq!(parse_amount("-42.25"), -42.25);
		assert_eq!(parse_amount("+7"), 7.0);
	}

	#[test]
	fn parses_partial_forms() {
		assert_eq!(parse_amount(".5"), 0.5);
		assert_eq!(parse_amount("3."), 3.0);
		assert_eq!(parse_amount("1e3"), 1000.0);
		assert_eq!(parse_amount("2.5E-1"), 0.25);
	}

	#[test]
	fn uses_leading_numeric_prefix() {
		assert_eq!(parse_amount("  12abc"), 12.0);
		assert_eq!(parse_amount("1,000"), 1.0);
		assert_eq!(parse_amount("4e"), 4.0);
		assert_eq!(parse_amount("4e+"), 4.0);
		assert_eq!(parse_amount("1.2.3"), 1.2);
	}

	#[test]
	fn parses_infinity() {
		assert_eq!(parse_amount("Infinity"), f64::INFINITY);
		assert_eq!(parse_amount("-Infinityxyz"), f64::NEG_INFINITY);
	}

	#[test]
	fn non_numeric_text_is_nan() {
		assert!(parse_amount("abc").is_nan());
		assert!(parse_amount("").is_nan());
		assert!(parse_amount("-").is_nan());
		assert!(parse_amount(".").is_nan());
		assert!(parse_amount("e5").is_nan());
		assert!(parse_amount("infinity").is_nan());
	}

	#[test]
	fn skips_leading_whitespace_but_not_next_line() {
		assert_eq!(parse_amount("\t\n 12"), 12.0);
		assert_eq!(parse_amount("\u{00A0}\u{2003}\u{3000}7"), 7.0);
		assert_eq!(parse_amount("\u{FEFF}\u{2028}3.5"), 3.5);
		assert!(parse_amount("\u{0085}12").is_nan());
	}

	#[test]
	fn negative_zero_keeps_sign() {
		assert!(parse_amount("-0").is_sign_negative());
	}

	#[test]
	fn amount_value_from_conversions() {
		assert_eq!(Amount::from(12).value(), 12.0);
		assert_eq!(Amount::from(12.5).value(), 12.5);
		assert_eq!(Amount::from("12.5 SYP").value(), 12.5);
		let owned = String::from("99");
		assert_eq!(Amount::from(&owned).value(), 99.0);
	}
}
