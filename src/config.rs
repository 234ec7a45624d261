// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{Diagnostic, IntoDiagnostic, Result};
use thiserror::Error;
use tokio::fs::read_to_string;
use tracing::Level;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let bind_addr = string_arg(&document, "bind_addr")?
		.ok_or(ConfigError::Missing("bind_addr"))?
		.to_string();

	let log_level = match string_arg(&document, "log_level")? {
		Some(level) => level
			.parse()
			.map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?,
		None => Level::INFO,
	};

	Ok(ConfigData { bind_addr, log_level })
}

fn string_arg<'a>(document: &'a KdlDocument, name: &'static str) -> Result<Option<&'a str>, ConfigError> {
	match document.get_arg(name) {
		Some(value) => value.as_string().map(Some).ok_or(ConfigError::NotAString(name)),
		None => Ok(None),
	}
}

#[derive(Debug)]
pub struct ConfigData {
	pub bind_addr: String,
	pub log_level: Level,
}

#[derive(Debug, Diagnostic, Error)]
pub enum ConfigError {
	#[error("missing required setting `{0}`")]
	#[diagnostic(code(config::missing), help("add a `{0}` node to the config file"))]
	Missing(&'static str),
	#[error("setting `{0}` must be a string")]
	#[diagnostic(code(config::not_a_string))]
	NotAString(&'static str),
	#[error("unknown log level `{0}`")]
	#[diagnostic(
		code(config::log_level),
		help("use one of `trace`, `debug`, `info`, `warn`, or `error`")
	)]
	InvalidLogLevel(String),
}
