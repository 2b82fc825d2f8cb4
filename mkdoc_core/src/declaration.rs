use std::fmt;
use std::iter::FusedIterator;

use crate::markers::DEFAULT_PREFIX;
use crate::tree::DocNode;
use crate::tree::DocTree;
use crate::tree::deep_set;

const GUARD_OPEN: &str = "#ifndef";
const DEFINE: &str = "#define";
const GUARD_CLOSE: &str = "#endif";

/// The value carried by a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocValue {
	/// The literal after the macro name with one layer of surrounding quotes
	/// removed.
	Text(String),
	/// The macro was defined without a literal.
	Flag,
}

impl DocValue {
	/// Build a value from the raw text between the macro name and `#endif`.
	///
	/// Whitespace is trimmed, then `"` characters are stripped from both ends.
	/// Anything left empty becomes a [`DocValue::Flag`]. Unbalanced quotes are
	/// stripped from whichever side carries them.
	pub fn from_literal(raw: &str) -> Self {
		let stripped = raw.trim().trim_matches('"');
		if stripped.is_empty() {
			Self::Flag
		} else {
			Self::Text(stripped.to_string())
		}
	}
}

impl From<DocValue> for DocNode {
	fn from(value: DocValue) -> Self {
		match value {
			DocValue::Text(text) => Self::Text(text),
			DocValue::Flag => Self::Flag(true),
		}
	}
}

impl fmt::Display for DocValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Flag => f.write_str("true"),
		}
	}
}

/// Ordered, lowercased key segments locating a value in a [`DocTree`].
///
/// A key path is never empty: splitting a tag always yields at least one
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
	/// Split a tag such as `size_X_y` into `["size", "x", "y"]`.
	pub fn from_tag(tag: &str) -> Self {
		Self(tag.split('_').map(str::to_lowercase).collect())
	}

	pub fn segments(&self) -> &[String] {
		&self.0
	}

	/// The final segment, which names the leaf.
	pub fn leaf(&self) -> &str {
		self.0.last().map_or("", String::as_str)
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join("."))
	}
}

/// A guarded macro definition found inside a documentation region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
	/// The full macro name, prefix included.
	pub name: String,
	pub path: KeyPath,
	pub value: DocValue,
}

/// Parse the declarations in `text` using the default `MKML` prefix.
pub fn parse_back_declarations(text: &str) -> Declarations<'_> {
	parse_declarations(text, DEFAULT_PREFIX)
}

/// Lazily find every `#ifndef NAME` / `#define NAME [literal]` / `#endif`
/// triple in `text` whose name starts with `prefix`.
///
/// The name after `#define` must be the same token as the guard name. A
/// mismatch, a missing `#endif`, or a name without a tag after the prefix is
/// skipped silently and scanning resumes after that `#ifndef`.
pub fn parse_declarations<'a>(text: &'a str, prefix: &'a str) -> Declarations<'a> {
	Declarations {
		text,
		prefix,
		cursor: 0,
	}
}

/// Build the documentation tree described by all declarations in `text`.
///
/// Later declarations overwrite earlier ones on the same path, and a scalar
/// standing where a later path needs a mapping is replaced by that mapping.
pub fn parse_tree(text: &str, prefix: &str) -> DocTree {
	build_tree(parse_declarations(text, prefix)).0
}

/// Apply `declarations` in order to a fresh tree with [`deep_set`].
///
/// Returns the tree and the number of declarations applied, overwritten ones
/// included.
pub fn build_tree(declarations: impl IntoIterator<Item = Declaration>) -> (DocTree, usize) {
	let mut tree = DocTree::default();
	let mut count = 0;

	for declaration in declarations {
		tracing::trace!(name = %declaration.name, path = %declaration.path, "declaration");
		deep_set(&mut tree, declaration.path.segments(), declaration.value.into());
		count += 1;
	}

	(tree, count)
}

/// Single pass iterator over the declarations of a text.
#[derive(Debug, Clone)]
pub struct Declarations<'a> {
	text: &'a str,
	prefix: &'a str,
	cursor: usize,
}

impl Iterator for Declarations<'_> {
	type Item = Declaration;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let rest = self.text.get(self.cursor..)?;
			let Some(offset) = rest.find(GUARD_OPEN) else {
				self.cursor = self.text.len();
				return None;
			};

			let after_open = self.cursor + offset + GUARD_OPEN.len();
			if let Some((declaration, end)) = self.match_declaration(after_open) {
				self.cursor = end;
				return Some(declaration);
			}

			self.cursor = after_open;
		}
	}
}

impl FusedIterator for Declarations<'_> {}

impl Declarations<'_> {
	/// Match the remainder of a declaration starting right after `#ifndef`.
	/// Returns the declaration and the byte offset just past its `#endif`.
	fn match_declaration(&self, start: usize) -> Option<(Declaration, usize)> {
		let text = self.text;

		let guard_start = skip_required_whitespace(text, start)?;
		let guard_end = word_end(text, guard_start);
		let guard = &text[guard_start..guard_end];
		let tag = guard
			.strip_prefix(self.prefix)
			.filter(|tag| !tag.is_empty())?;

		let define_start = skip_required_whitespace(text, guard_end)?;
		if !text[define_start..].starts_with(DEFINE) {
			return None;
		}

		let name_start = skip_required_whitespace(text, define_start + DEFINE.len())?;
		let name_end = word_end(text, name_start);
		if &text[name_start..name_end] != guard {
			return None;
		}

		let (close_start, close_end) = find_guard_close(text, name_end)?;
		let declaration = Declaration {
			name: guard.to_string(),
			path: KeyPath::from_tag(tag),
			value: DocValue::from_literal(&text[name_end..close_start]),
		};

		Some((declaration, close_end))
	}
}

fn is_word_char(ch: char) -> bool {
	ch == '_' || ch.is_alphanumeric()
}

/// Advance past a run of at least one whitespace character.
fn skip_required_whitespace(text: &str, start: usize) -> Option<usize> {
	let rest = &text[start..];
	let skipped = rest.len() - rest.trim_start().len();
	(skipped > 0).then_some(start + skipped)
}

fn word_end(text: &str, start: usize) -> usize {
	text[start..]
		.char_indices()
		.find(|&(_, ch)| !is_word_char(ch))
		.map_or(text.len(), |(index, _)| start + index)
}

/// Find the first `#endif` after `from` that is preceded by whitespace lying
/// after `from`.
fn find_guard_close(text: &str, from: usize) -> Option<(usize, usize)> {
	let mut search_from = from;

	while let Some(offset) = text[search_from..].find(GUARD_CLOSE) {
		let close_start = search_from + offset;
		let preceded_by_space = text[from..close_start]
			.chars()
			.next_back()
			.is_some_and(char::is_whitespace);

		if preceded_by_space {
			return Some((close_start, close_start + GUARD_CLOSE.len()));
		}

		search_from = close_start + GUARD_CLOSE.len();
	}

	None
}
