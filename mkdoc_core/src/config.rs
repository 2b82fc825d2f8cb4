use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::MkdocError;
use crate::MkdocResult;
use crate::markers::DEFAULT_PREFIX;
use crate::markers::Markers;
use crate::render::HtmlOptions;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Directory the documentation files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// File name suffixes scanned by default.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["cpp", "h"];

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["mkdoc.toml", ".mkdoc.toml", ".config/mkdoc.toml"];

/// Configuration loaded from an `mkdoc.toml` file.
///
/// Every field is optional; an empty file behaves exactly like no file.
///
/// ```toml
/// extensions = ["cpp", "h", "hpp"]
/// prefix = "MKML"
/// output_dir = "docs"
/// disable_gitignore = false
///
/// [markers]
/// start = "/*back_start*/"
/// end = "/*back_end*/"
///
/// [exclude]
/// patterns = ["vendor/", "third_party/"]
///
/// [html]
/// title = "MKCC Doc"
/// heading = "MKCC Documentation"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MkdocConfig {
	/// File name suffixes (without the dot) to scan.
	#[serde(default = "default_extensions")]
	pub extensions: Vec<String>,
	/// Prefix a macro name must start with to be documented.
	#[serde(default = "default_prefix")]
	pub prefix: String,
	/// Region marker tokens.
	#[serde(default)]
	pub markers: Markers,
	/// Directory receiving `mkcc_doc.json` and `mkcc_doc.html`.
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	/// Exclusion configuration using gitignore-style patterns.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// Maximum file size in bytes to scan. Larger files abort the run.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
	/// When true, the scanned root's `.gitignore` is not consulted.
	#[serde(default)]
	pub disable_gitignore: bool,
	#[serde(default)]
	pub html: HtmlOptions,
}

/// Configuration for excluding files from scanning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
	/// Gitignore-style patterns, relative to the scanned root.
	#[serde(default)]
	pub patterns: Vec<String>,
}

impl Default for MkdocConfig {
	fn default() -> Self {
		Self {
			extensions: default_extensions(),
			prefix: default_prefix(),
			markers: Markers::default(),
			output_dir: default_output_dir(),
			exclude: ExcludeConfig::default(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			disable_gitignore: false,
			html: HtmlOptions::default(),
		}
	}
}

fn default_extensions() -> Vec<String> {
	DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_prefix() -> String {
	DEFAULT_PREFIX.to_string()
}

fn default_output_dir() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

impl MkdocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(dir: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| dir.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file in `dir`.
	/// Returns `None` if no candidate exists.
	pub fn load(dir: &Path) -> MkdocResult<Option<MkdocConfig>> {
		let Some(config_path) = Self::resolve_path(dir) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load and validate a config from an explicit path.
	pub fn load_file(path: &Path) -> MkdocResult<MkdocConfig> {
		let content = std::fs::read_to_string(path).map_err(|source| {
			MkdocError::ReadFile {
				path: path.to_path_buf(),
				source,
			}
		})?;
		let config: MkdocConfig =
			toml::from_str(&content).map_err(|e| MkdocError::ConfigParse(e.to_string()))?;
		config.validate()?;

		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Reject settings that would make scanning meaningless.
	pub fn validate(&self) -> MkdocResult<()> {
		if self.extensions.is_empty() {
			return Err(MkdocError::InvalidConfig(
				"`extensions` must list at least one file suffix".to_string(),
			));
		}

		if self.extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
			return Err(MkdocError::InvalidConfig(
				"`extensions` must not contain empty suffixes".to_string(),
			));
		}

		if self.prefix.is_empty() {
			return Err(MkdocError::InvalidConfig("`prefix` must not be empty".to_string()));
		}

		if !self.markers.is_valid() {
			return Err(MkdocError::InvalidConfig(
				"`markers.start` and `markers.end` must not be empty".to_string(),
			));
		}

		Ok(())
	}
}
