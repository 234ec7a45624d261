// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display formatting for Syrian pound amounts.

mod amount;
mod language;
mod locale;

pub use amount::{Amount, parse_amount};
pub use language::{Language, ParseLanguageError};
pub use locale::{ARABIC, ENGLISH, MAX_FRACTION_DIGITS, NumberLocale};
use thiserror::Error;

/// Formats an amount of Syrian pounds for display in the given language.
///
/// The number is written with the language's digits and separators and followed by the currency label, e.g.
/// `1,000 SYP` or `١٬٠٠٠ ل.س`. Text that doesn't start with a number never fails; the language's not-a-number text
/// takes the number's place instead.
pub fn format_currency<'a>(amount: impl Into<Amount<'a>>, language: Language) -> String {
	let value = amount.into().value();
	format!(
		"{} {}",
		language.locale().format_number(value),
		language.currency_label()
	)
}

/// Formats an amount in the default language
pub fn format_syp<'a>(amount: impl Into<Amount<'a>>) -> String {
	format_currency(amount, Language::default())
}

#[derive(Debug, Eq, Error, PartialEq)]
pub enum ParseAmountError {
	#[error("amount `{0}` is not a number")]
	NotANumber(String),
}

/// Like [`format_currency`], but amounts that aren't numbers are an error.
pub fn try_format_currency<'a>(amount: impl Into<Amount<'a>>, language: Language) -> Result<String, ParseAmountError> {
	let amount = amount.into();
	let value = amount.value();
	if value.is_nan() {
		let input = match amount {
			Amount::Number(value) => value.to_string(),
			Amount::Text(text) => text.to_string(),
		};
		return Err(ParseAmountError::NotANumber(input));
	}
	Ok(format_currency(value, language))
}
