// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use std::sync::Arc;
	use syp_display::config::parse_config;
	use syp_display::web::server::run_server;

	let config = parse_config("config.kdl").await?;
	tracing_subscriber::fmt().with_max_level(config.log_level).init();

	run_server(Arc::new(config)).await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
