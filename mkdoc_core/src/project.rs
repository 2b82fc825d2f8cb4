use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::MkdocError;
use crate::MkdocResult;
use crate::config::MkdocConfig;
use crate::declaration::build_tree;
use crate::declaration::parse_declarations;
use crate::extract::extract_regions;
use crate::markers::Markers;
use crate::tree::DocTree;
use crate::tree::merge_trees;

/// Options for controlling how a directory is scanned.
///
/// Use [`ScanOptions::default()`] for the stock `.cpp`/`.h` scan or
/// [`ScanOptions::from_config`] to construct from an [`MkdocConfig`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// File name suffixes, without the leading dot.
	pub extensions: Vec<String>,
	pub markers: Markers,
	pub prefix: String,
	/// Gitignore-style patterns to exclude from scanning.
	pub exclude_patterns: Vec<String>,
	/// Whether to disable `.gitignore` integration.
	pub disable_gitignore: bool,
	/// Maximum file size to scan in bytes.
	pub max_file_size: u64,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self::from_config(None)
	}
}

impl ScanOptions {
	/// Construct [`ScanOptions`] from an optional [`MkdocConfig`].
	pub fn from_config(config: Option<&MkdocConfig>) -> Self {
		let default_config;
		let config = match config {
			Some(config) => config,
			None => {
				default_config = MkdocConfig::default();
				&default_config
			}
		};

		Self {
			extensions: config.extensions.clone(),
			markers: config.markers.clone(),
			prefix: config.prefix.clone(),
			exclude_patterns: config.exclude.patterns.clone(),
			disable_gitignore: config.disable_gitignore,
			max_file_size: config.max_file_size,
		}
	}

	/// Whether the file name ends with one of the configured suffixes.
	pub fn is_candidate(&self, path: &Path) -> bool {
		let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
			return false;
		};

		self.extensions.iter().any(|ext| {
			let ext = ext.trim_start_matches('.');
			name.strip_suffix(ext)
				.is_some_and(|stem| stem.ends_with('.'))
		})
	}
}

/// Outcome of scanning a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
	/// The merged documentation tree of every scanned file.
	pub tree: DocTree,
	/// Files visited, in processing order.
	pub files: Vec<PathBuf>,
	/// Total number of declarations parsed across all files.
	pub declarations: usize,
}

impl ScanReport {
	/// True when no declaration was found anywhere.
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}
}

/// Build the documentation tree of a single file's content.
pub fn parse_file_content(content: &str, options: &ScanOptions) -> DocTree {
	build_file_tree(content, options).0
}

/// Extract, parse and build one file's tree, also returning how many
/// declarations went into it.
fn build_file_tree(content: &str, options: &ScanOptions) -> (DocTree, usize) {
	let regions = extract_regions(content, &options.markers);
	build_tree(parse_declarations(&regions, &options.prefix))
}

/// Scan `root` and merge the documentation of every candidate file.
///
/// Files are processed one at a time in sorted path order; `on_file` is
/// called before each file is read. Any read failure aborts the scan.
pub fn scan_project(
	root: &Path,
	options: &ScanOptions,
	mut on_file: impl FnMut(&Path),
) -> MkdocResult<ScanReport> {
	let files = collect_files(root, options)?;
	let mut report = ScanReport::default();

	for file in files {
		on_file(&file);
		let content = read_source_file(&file, options.max_file_size)?;
		let (tree, count) = build_file_tree(&content, options);

		tracing::debug!(path = %file.display(), declarations = count, "parsed file");
		merge_trees(&mut report.tree, &tree);
		report.declarations += count;
		report.files.push(file);
	}

	Ok(report)
}

fn read_source_file(file: &Path, max_file_size: u64) -> MkdocResult<String> {
	let metadata = std::fs::metadata(file).map_err(|source| {
		MkdocError::ReadFile {
			path: file.to_path_buf(),
			source,
		}
	})?;

	if metadata.len() > max_file_size {
		return Err(MkdocError::FileTooLarge {
			path: file.display().to_string(),
			size: metadata.len(),
			limit: max_file_size,
		});
	}

	std::fs::read_to_string(file).map_err(|source| {
		MkdocError::ReadFile {
			path: file.to_path_buf(),
			source,
		}
	})
}

/// Build a `Gitignore` matcher from the configured exclude patterns. These
/// follow `.gitignore` syntax and are applied on top of any `.gitignore`
/// rules.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> MkdocResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			MkdocError::InvalidExcludePattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			}
		})?;
	}
	builder.build().map_err(|e| {
		MkdocError::InvalidExcludePattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		}
	})
}

/// Build a `Gitignore` matcher from the root's `.gitignore` file (if any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}

/// Collect every candidate file below `root`, sorted by path.
///
/// A root that does not exist or is not a directory yields no files.
pub fn collect_files(root: &Path, options: &ScanOptions) -> MkdocResult<Vec<PathBuf>> {
	let mut files = Vec::new();

	let gitignore = if options.disable_gitignore {
		Gitignore::empty()
	} else {
		build_gitignore(root)
	};
	let custom_exclude = build_exclude_matcher(root, &options.exclude_patterns)?;

	walk_dir(root, options, &mut files, &gitignore, &custom_exclude)?;
	// Sort for deterministic merge order.
	files.sort();
	Ok(files)
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

fn walk_dir(
	dir: &Path,
	options: &ScanOptions,
	files: &mut Vec<PathBuf>,
	gitignore: &Gitignore,
	custom_exclude: &Gitignore,
) -> MkdocResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();
		let is_dir = path.is_dir();

		// Symlinked directories are never descended into; symlinked files are
		// read like any other file.
		if is_dir && entry.file_type()?.is_symlink() {
			tracing::trace!(path = %path.display(), "skipping directory symlink");
			continue;
		}

		if is_dir
			&& path
				.file_name()
				.and_then(|name| name.to_str())
				.is_some_and(is_ignored_directory_name)
		{
			continue;
		}

		if gitignore.matched(&path, is_dir).is_ignore()
			|| custom_exclude.matched(&path, is_dir).is_ignore()
		{
			continue;
		}

		if is_dir {
			walk_dir(&path, options, files, gitignore, custom_exclude)?;
		} else if options.is_candidate(&path) {
			files.push(path);
		}
	}

	Ok(())
}
