use std::fmt;

use derive_more::Deref;
use derive_more::DerefMut;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A node of the documentation tree.
///
/// Serialized untagged, so a tree reads as plain JSON: branches are objects,
/// text is a string and flags are booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocNode {
	/// A declaration without a literal. Always `true` when produced by the
	/// parser.
	Flag(bool),
	Text(String),
	Branch(DocTree),
}

impl DocNode {
	pub fn is_branch(&self) -> bool {
		matches!(self, Self::Branch(_))
	}

	pub fn as_branch(&self) -> Option<&DocTree> {
		match self {
			Self::Branch(tree) => Some(tree),
			Self::Flag(_) | Self::Text(_) => None,
		}
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Flag(_) | Self::Branch(_) => None,
		}
	}
}

impl fmt::Display for DocNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Flag(flag) => write!(f, "{flag}"),
			Self::Text(text) => f.write_str(text),
			Self::Branch(tree) => write!(f, "{{{} keys}}", tree.len()),
		}
	}
}

impl From<&str> for DocNode {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<bool> for DocNode {
	fn from(value: bool) -> Self {
		Self::Flag(value)
	}
}

impl From<DocTree> for DocNode {
	fn from(value: DocTree) -> Self {
		Self::Branch(value)
	}
}

/// An insertion ordered mapping of keys to [`DocNode`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct DocTree(IndexMap<String, DocNode>);

impl DocTree {
	pub fn new() -> Self {
		Self::default()
	}

	/// Look up the node at `path`, descending through branches.
	pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&DocNode> {
		let (first, rest) = path.split_first()?;
		let node = self.get(first.as_ref())?;
		if rest.is_empty() {
			return Some(node);
		}

		node.as_branch()?.get_path(rest)
	}

	/// Number of scalar nodes anywhere in the tree.
	pub fn leaf_count(&self) -> usize {
		self.values()
			.map(|node| {
				match node {
					DocNode::Branch(tree) => tree.leaf_count(),
					DocNode::Flag(_) | DocNode::Text(_) => 1,
				}
			})
			.sum()
	}
}

impl<K: Into<String>, V: Into<DocNode>> FromIterator<(K, V)> for DocTree {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

/// Set `node` at `path`, creating intermediate branches as needed.
///
/// Every segment but the last must name a branch: a missing key gets a fresh
/// empty branch and a scalar in the way is discarded and replaced by one. The
/// last segment is overwritten unconditionally. An empty path is a no-op.
pub fn deep_set<S: AsRef<str>>(tree: &mut DocTree, path: &[S], node: DocNode) {
	let Some((first, rest)) = path.split_first() else {
		return;
	};
	let key = first.as_ref().to_string();

	if rest.is_empty() {
		tree.insert(key, node);
		return;
	}

	match tree
		.entry(key)
		.or_insert_with(|| DocNode::Branch(DocTree::default()))
	{
		DocNode::Branch(child) => deep_set(child, rest, node),
		slot @ (DocNode::Flag(_) | DocNode::Text(_)) => {
			let mut child = DocTree::default();
			deep_set(&mut child, rest, node);
			*slot = DocNode::Branch(child);
		}
	}
}

/// Fold `source` into `destination`.
///
/// Where both sides hold a branch under the same key the branches are merged
/// recursively, so siblings from either side survive. Everywhere else the
/// source entry replaces the destination entry wholesale, whether that swaps a
/// scalar for a scalar, a branch for a scalar, or the reverse.
pub fn merge_trees(destination: &mut DocTree, source: &DocTree) {
	for (key, incoming) in source.iter() {
		if let (Some(DocNode::Branch(existing)), DocNode::Branch(incoming)) =
			(destination.get_mut(key), incoming)
		{
			merge_trees(existing, incoming);
			continue;
		}

		destination.insert(key.clone(), incoming.clone());
	}
}

/// Merge `trees` left to right into a single tree.
pub fn merge_all<'a>(trees: impl IntoIterator<Item = &'a DocTree>) -> DocTree {
	trees.into_iter().fold(DocTree::default(), |mut merged, tree| {
		merge_trees(&mut merged, tree);
		merged
	})
}
