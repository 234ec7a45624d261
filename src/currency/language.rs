// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::locale::{ARABIC, ENGLISH, NumberLocale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The languages amounts can be displayed in
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	#[default]
	En,
	Ar,
}

impl Language {
	pub fn tag(self) -> &'static str {
		match self {
			Self::En => "en",
			Self::Ar => "ar",
		}
	}

	/// The label written after a formatted amount
	pub fn currency_label(self) -> &'static str {
		match self {
			Self::En => "SYP",
			Self::Ar => "ل.س",
		}
	}

	pub fn locale(self) -> &'static NumberLocale {
		match self {
			Self::En => &ENGLISH,
			Self::Ar => &ARABIC,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("unsupported language tag `{0}`")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
	type Err = ParseLanguageError;

	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		if tag.eq_ignore_ascii_case("en") {
			Ok(Self::En)
		} else if tag.eq_ignore_ascii_case("ar") {
			Ok(Self::Ar)
		} else {
			Err(ParseLanguageError(tag.to_string()))
		}
	}
}
