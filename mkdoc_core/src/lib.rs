//! `mkdoc_core` turns guarded macro declarations hidden in C++ sources into a
//! nested documentation tree, and renders that tree as JSON and HTML.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file (.cpp / .h)
//!   → Extractor (text between /*back_start*/ and /*back_end*/)
//!   → Declaration parser (#ifndef MKMLx / #define MKMLx "v" / #endif → key path + value)
//!   → Tree builder (size_x → {"size": {"x": ...}})
//!   → Merger (deep, right biased fold of every file's tree)
//!   → Renderers (mkcc_doc.json, mkcc_doc.html)
//! ```
//!
//! ## Modules
//!
//! - [`extract`] — Region extraction between marker tokens.
//! - [`declaration`] — Structural matching of guarded `#define`s.
//! - [`tree`] — The documentation tree, `deep_set` and `merge_trees`.
//! - [`render`] — JSON and HTML renderers.
//! - [`project`] — Directory walking and per-file processing.
//! - [`config`] — Configuration loading from `mkdoc.toml`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use mkdoc_core::HtmlOptions;
//! use mkdoc_core::OutputFormats;
//! use mkdoc_core::ScanOptions;
//! use mkdoc_core::scan_project;
//! use mkdoc_core::write_outputs;
//!
//! let report = scan_project(Path::new("core"), &ScanOptions::default(), |_| {}).unwrap();
//! if !report.is_empty() {
//!     write_outputs(&report.tree, Path::new("docs"), OutputFormats::All, &HtmlOptions::default())
//!         .unwrap();
//! }
//! ```

pub use config::*;
pub use declaration::*;
pub use error::*;
pub use extract::*;
pub use markers::*;
pub use output::*;
pub use project::*;
pub use render::*;
pub use tree::*;

pub mod config;
pub mod declaration;
#[allow(unused_assignments)]
mod error;
pub mod extract;
mod markers;
mod output;
pub mod project;
pub mod render;
pub mod tree;

#[cfg(test)]
mod __fixtures;
