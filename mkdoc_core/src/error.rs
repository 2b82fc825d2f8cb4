use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MkdocError {
	#[error(transparent)]
	#[diagnostic(code(mkdoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`")]
	#[diagnostic(
		code(mkdoc::read_file),
		help("scanned files must be readable UTF-8 text; exclude the file if it is not")
	)]
	ReadFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write `{path}`")]
	#[diagnostic(code(mkdoc::write_file))]
	WriteFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mkdoc::config_parse),
		help("check that mkdoc.toml is valid TOML")
	)]
	ConfigParse(String),

	#[error("invalid configuration: {0}")]
	#[diagnostic(code(mkdoc::invalid_config))]
	InvalidConfig(String),

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(mkdoc::invalid_exclude_pattern),
		help("exclude patterns use .gitignore syntax")
	)]
	InvalidExcludePattern { pattern: String, reason: String },

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(mkdoc::file_too_large),
		help("increase `max_file_size` in mkdoc.toml or exclude this file")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },

	#[error("failed to process documentation json: {0}")]
	#[diagnostic(code(mkdoc::json))]
	Json(#[from] serde_json::Error),

	#[error("html rendering failed: {0}")]
	#[diagnostic(code(mkdoc::template_render))]
	TemplateRender(String),
}

impl From<minijinja::Error> for MkdocError {
	fn from(error: minijinja::Error) -> Self {
		Self::TemplateRender(error.to_string())
	}
}

pub type MkdocResult<T> = Result<T, MkdocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
