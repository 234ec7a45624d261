// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use syp_display::currency::{Language, format_currency, format_syp, try_format_currency};

#[test]
fn english_amounts() {
	assert_eq!(format_syp(1000), "1,000 SYP");
	assert_eq!(format_syp("1500.50"), "1,500.5 SYP");
	assert_eq!(format_syp(-1234567.891), "-1,234,567.891 SYP");
	assert_eq!(format_syp("  250000 pounds"), "250,000 SYP");
}

#[test]
fn arabic_amounts() {
	assert_eq!(format_currency(1000, Language::Ar), "١٬٠٠٠ ل.س");
	assert_eq!(format_currency(0.5, Language::Ar), "٠٫٥ ل.س");
}

#[test]
fn language_from_tag() {
	let language: Language = "ar".parse().expect("valid tag");
	assert_eq!(format_currency("12", language), "١٢ ل.س");
}

#[test]
fn invalid_text_does_not_panic() {
	assert_eq!(format_syp("abc"), "NaN SYP");
	assert_eq!(format_currency("", Language::Ar), "ليس رقمًا ل.س");
	assert!(try_format_currency("abc", Language::En).is_err());
}
