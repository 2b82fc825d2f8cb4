use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use mkdoc_core::OutputFormats;

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = "core";

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate JSON and HTML documentation from guarded macro declarations.",
	long_about = "mkdoc scans C++ sources for documentation regions delimited by \
	              /*back_start*/ and /*back_end*/, reads the `#ifndef MKMLx` / `#define MKMLx \
	              \"value\"` / `#endif` declarations inside them, and writes the merged result \
	              to docs/mkcc_doc.json and docs/mkcc_doc.html.\n\nMacro names are split on \
	              underscores into nested keys: MKMLsize_x becomes {\"size\": {\"x\": ...}}."
)]
pub struct MkdocCli {
	/// Directory to scan for `.cpp` and `.h` files.
	#[arg(default_value = DEFAULT_ROOT)]
	pub root: PathBuf,

	/// Directory receiving the generated documents. Overrides `output_dir`
	/// from the config file.
	#[arg(long, short)]
	pub out_dir: Option<PathBuf>,

	/// Explicit config file. By default `mkdoc.toml`, `.mkdoc.toml` or
	/// `.config/mkdoc.toml` in the current directory is used when present.
	#[arg(long, short)]
	pub config: Option<PathBuf>,

	/// Which documents to write.
	#[arg(long, value_enum, default_value_t = FormatArg::All)]
	pub format: FormatArg,

	/// Scan and print the JSON document to stdout without writing files.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Enable verbose logging on stderr.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
	/// Only `mkcc_doc.json`.
	Json,
	/// Only `mkcc_doc.html`.
	Html,
	/// Both documents.
	All,
}

impl From<FormatArg> for OutputFormats {
	fn from(value: FormatArg) -> Self {
		match value {
			FormatArg::Json => Self::Json,
			FormatArg::Html => Self::Html,
			FormatArg::All => Self::All,
		}
	}
}
