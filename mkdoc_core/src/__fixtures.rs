use std::path::Path;

use crate::AnyEmptyResult;
use crate::DocTree;

/// Window settings in the shape the code generator emits them.
pub const MAIN_CPP: &str = r#"#include "include/div.h"
#include "include/font.h"

/*start*/

/*back_start*/
#ifndef MKMLtitle
#define MKMLtitle "My MKCC Application"
#endif
#ifndef MKMLsize_x
#define MKMLsize_x "800"
#endif
#ifndef MKMLsize_y
#define MKMLsize_y "600"
#endif
/*back_end*/
template<typename T>
std::unique_ptr<T> create_script(Div& root) {
    auto s = std::make_unique<T>(root);
    s->on_load();
    return s;
}
"#;

/// A header with a flag, a guard mismatch and a declaration outside any
/// region.
pub const STYLE_H: &str = r#"#pragma once
/*back_start*/
#ifndef MKMLdebug
#define MKMLdebug
#endif
#ifndef MKMLtheme_color
#define MKMLtheme_other "red"
#endif
/*back_end*/
#ifndef MKMLhidden
#define MKMLhidden "outside"
#endif
"#;

pub fn main_cpp_tree() -> DocTree {
	DocTree::from_iter([
		("title", crate::DocNode::from("My MKCC Application")),
		(
			"size",
			DocTree::from_iter([("x", "800"), ("y", "600")]).into(),
		),
	])
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;

	Ok(())
}

/// Wrap declarations in a single documentation region.
pub fn region(body: &str) -> String {
	format!("/*back_start*/\n{body}\n/*back_end*/\n")
}

/// A complete guarded declaration.
pub fn declare(name: &str, value: Option<&str>) -> String {
	match value {
		Some(value) => format!("#ifndef {name}\n#define {name} \"{value}\"\n#endif"),
		None => format!("#ifndef {name}\n#define {name}\n#endif"),
	}
}
