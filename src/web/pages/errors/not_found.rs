// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
	#[cfg(feature = "ssr")]
	set_not_found_status();

	view! {
		<main id="not_found_page">
			<h1>"Page not found"</h1>
			<p>"The page you are looking for does not exist."</p>
		</main>
	}
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
	use axum::http::StatusCode;
	use leptos_axum::ResponseOptions;

	if let Some(response) = use_context::<ResponseOptions>() {
		response.set_status(StatusCode::NOT_FOUND);
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;
	use leptos_axum::ResponseOptions;

	#[test]
	fn rendering_sets_404_status() {
		let owner = Owner::new();
		owner.with(|| {
			let response = ResponseOptions::default();
			provide_context(response.clone());

			let _view = NotFound();

			let parts = format!("{:?}", response);
			assert!(parts.contains("404"), "status not set: {}", parts);
		});
	}

	#[test]
	fn rendering_without_response_context_does_not_panic() {
		let owner = Owner::new();
		owner.with(|| {
			let _view = NotFound();
		});
	}
}
