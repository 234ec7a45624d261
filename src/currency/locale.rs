// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Largest number of fraction digits shown for an amount
pub const MAX_FRACTION_DIGITS: usize = 3;

/// The symbols a language uses to write a number
#[derive(Debug, Eq, PartialEq)]
pub struct NumberLocale {
	pub digits: [char; 10],
	pub group_separator: char,
	pub decimal_separator: char,
	pub minus_sign: &'static str,
	pub infinity: &'static str,
	pub not_a_number: &'static str,
}

pub static ENGLISH: NumberLocale = NumberLocale {
	digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
	group_separator: ',',
	decimal_separator: '.',
	minus_sign: "-",
	infinity: "∞",
	not_a_number: "NaN",
};

pub static ARABIC: NumberLocale = NumberLocale {
	digits: ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'],
	group_separator: '٬',
	decimal_separator: '٫',
	minus_sign: "\u{061C}-",
	infinity: "∞",
	not_a_number: "ليس رقمًا",
};

impl NumberLocale {
	/// Writes a number with this locale's digits, grouping every three integer digits.
	///
	/// At most [`MAX_FRACTION_DIGITS`] fraction digits are kept. Rounding is half away from zero and works on the
	/// shortest decimal form of the value, so `1.0005` rounds up to `1.001`. Any sign-negative value, `-0` included,
	/// gets the minus sign.
	pub fn format_number(&self, value: f64) -> String {
		if value.is_nan() {
			return String::from(self.not_a_number);
		}

		let mut formatted = String::new();
		if value.is_sign_negative() {
			formatted.push_str(self.minus_sign);
		}

		if value.is_infinite() {
			formatted.push_str(self.infinity);
			return formatted;
		}

		let (integer_digits, fraction_digits) = round_decimal(&value.abs().to_string(), MAX_FRACTION_DIGITS);

		let integer_len = integer_digits.len();
		for (index, digit) in integer_digits.iter().enumerate() {
			if index > 0 && (integer_len - index) % 3 == 0 {
				formatted.push(self.group_separator);
			}
			formatted.push(self.digits[usize::from(*digit)]);
		}

		if !fraction_digits.is_empty() {
			formatted.push(self.decimal_separator);
			formatted.extend(fraction_digits.iter().map(|digit| self.digits[usize::from(*digit)]));
		}

		formatted
	}
}

/// Rounds a plain (non-exponent, unsigned) decimal string to `max_fraction` places.
///
/// Returns the integer and fraction digit values separately. The fraction part has no trailing zeros.
fn round_decimal(decimal: &str, max_fraction: usize) -> (Vec<u8>, Vec<u8>) {
	let (integer_part, fraction_part) = decimal.split_once('.').unwrap_or((decimal, ""));

	let mut integer_digits: Vec<u8> = integer_part.bytes().map(|byte| byte - b'0').collect();
	let mut fraction_digits: Vec<u8> = fraction_part.bytes().map(|byte| byte - b'0').collect();

	if fraction_digits.len() > max_fraction {
		let round_up = fraction_digits[max_fraction] >= 5;
		fraction_digits.truncate(max_fraction);

		if round_up {
			let mut carry = true;
			for digit in fraction_digits.iter_mut().rev().chain(integer_digits.iter_mut().rev()) {
				if *digit == 9 {
					*digit = 0;
				} else {
					*digit += 1;
					carry = false;
					break;
				}
			}
			if carry {
				integer_digits.insert(0, 1);
			}
		}
	}

	while fraction_digits.last() == Some(&0) {
		fraction_digits.pop();
	}

	(integer_digits, fraction_digits)
}
