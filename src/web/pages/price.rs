// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use crate::currency::{Language, format_currency};
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Clone, Debug, Params, PartialEq)]
pub struct PriceParams {
	pub amount: Option<String>,
	pub language: Option<String>,
}

/// An amount of Syrian pounds, formatted for the given language
#[component]
pub fn Price(#[prop(into)] amount: String, #[prop(optional)] language: Language) -> impl IntoView {
	let formatted = format_currency(&amount, language);

	view! {
		<span class="price" lang={language.tag()}>{formatted}</span>
	}
}

/// The amount and language a price page shows, or `None` if the page doesn't exist
fn price_from_params(params: &PriceParams) -> Option<(String, Language)> {
	let amount = params.amount.clone()?;
	let language = match params.language.as_deref() {
		Some(tag) => tag.parse().ok()?,
		None => Language::default(),
	};
	Some((amount, language))
}

#[component]
pub fn PricePage() -> impl IntoView {
	let params = use_params::<PriceParams>();

	move || {
		let price = params.read().as_ref().ok().and_then(price_from_params);

		match price {
			Some((amount, language)) => view! {
				<main id="price_page">
					<Price amount language />
				</main>
			}
			.into_any(),
			None => view! { <NotFound /> }.into_any(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params(amount: Option<&str>, language: Option<&str>) -> PriceParams {
		PriceParams {
			amount: amount.map(String::from),
			language: language.map(String::from),
		}
	}

	#[test]
	fn missing_language_uses_default() {
		assert_eq!(
			price_from_params(&params(Some("1000"), None)),
			Some((String::from("1000"), Language::En))
		);
	}

	#[test]
	fn language_tag_is_case_insensitive() {
		assert_eq!(
			price_from_params(&params(Some("1000"), Some("AR"))),
			Some((String::from("1000"), Language::Ar))
		);
		assert_eq!(
			price_from_params(&params(Some("5"), Some("EN"))),
			Some((String::from("5"), Language::En))
		);
	}

	#[test]
	fn unknown_language_is_not_found() {
		assert_eq!(price_from_params(&params(Some("1000"), Some("fr"))), None);
	}

	#[test]
	fn missing_amount_is_not_found() {
		assert_eq!(price_from_params(&params(None, Some("ar"))), None);
		assert_eq!(price_from_params(&params(None, None)), None);
	}
}
