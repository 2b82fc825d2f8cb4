use std::path::Path;
use std::path::PathBuf;

use crate::MkdocError;
use crate::MkdocResult;
use crate::render::HtmlOptions;
use crate::render::render_html;
use crate::render::render_json;
use crate::tree::DocTree;

pub const JSON_FILE_NAME: &str = "mkcc_doc.json";
pub const HTML_FILE_NAME: &str = "mkcc_doc.html";

/// Which documents to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormats {
	Json,
	Html,
	#[default]
	All,
}

impl OutputFormats {
	pub fn json(self) -> bool {
		matches!(self, Self::Json | Self::All)
	}

	pub fn html(self) -> bool {
		matches!(self, Self::Html | Self::All)
	}
}

/// Paths of the files written by [`write_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenOutputs {
	pub json: Option<PathBuf>,
	pub html: Option<PathBuf>,
}

/// Write the rendered documents into `dir`, creating it when missing.
///
/// JSON is written before HTML. Any failure aborts immediately, possibly
/// leaving the JSON document behind.
pub fn write_outputs(
	tree: &DocTree,
	dir: &Path,
	formats: OutputFormats,
	html: &HtmlOptions,
) -> MkdocResult<WrittenOutputs> {
	std::fs::create_dir_all(dir).map_err(|source| {
		MkdocError::WriteFile {
			path: dir.to_path_buf(),
			source,
		}
	})?;

	let mut written = WrittenOutputs::default();

	if formats.json() {
		let path = dir.join(JSON_FILE_NAME);
		write_file(&path, &render_json(tree)?)?;
		written.json = Some(path);
	}

	if formats.html() {
		let path = dir.join(HTML_FILE_NAME);
		write_file(&path, &render_html(tree, html)?)?;
		written.html = Some(path);
	}

	Ok(written)
}

fn write_file(path: &Path, content: &str) -> MkdocResult<()> {
	tracing::debug!(path = %path.display(), bytes = content.len(), "writing output");
	std::fs::write(path, content).map_err(|source| {
		MkdocError::WriteFile {
			path: path.to_path_buf(),
			source,
		}
	})
}
