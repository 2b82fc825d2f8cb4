use minijinja::Environment;
use minijinja::context;
use serde::Deserialize;
use serde::Serialize;

use crate::MkdocResult;
use crate::tree::DocNode;
use crate::tree::DocTree;

const HTML_TEMPLATE_NAME: &str = "mkcc_doc.html";
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="UTF-8"><title>{{ title }}</title></head><body>
<h1>{{ heading }}</h1>
<h2>head:</h2>
{% for item in items %}
{% if item.kind == "section" %}
{{ item.indent }}<h{{ item.level }}>{{ item.key }}</h{{ item.level }}>
{{ item.indent }}<div style='margin-left:20px;'>
{% elif item.kind == "close" %}
{{ item.indent }}</div>
{% else %}
{{ item.indent }}<p><b>{{ item.key }}</b>: {{ item.value }}</p>
{% endif %}
{% endfor %}

</body></html>"#;

const INDENT: &str = "    ";
/// Heading level used for the outermost branches; `<h1>` and the first `<h2>`
/// belong to the page shell.
const BASE_HEADING_LEVEL: usize = 2;

/// Presentation settings for the HTML document.
///
/// ```toml
/// [html]
/// title = "MKCC Doc"
/// heading = "MKCC Documentation"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
	/// Contents of the `<title>` element.
	#[serde(default = "default_title")]
	pub title: String,
	/// Contents of the top level `<h1>` heading.
	#[serde(default = "default_heading")]
	pub heading: String,
}

impl Default for HtmlOptions {
	fn default() -> Self {
		Self {
			title: default_title(),
			heading: default_heading(),
		}
	}
}

fn default_title() -> String {
	"MKCC Doc".to_string()
}

fn default_heading() -> String {
	"MKCC Documentation".to_string()
}

/// Serialize the tree as pretty printed JSON with two space indentation.
///
/// Keys keep their insertion order, flags are written as JSON booleans and
/// non-ASCII text is written literally.
pub fn render_json(tree: &DocTree) -> MkdocResult<String> {
	Ok(serde_json::to_string_pretty(tree)?)
}

/// Read a document produced by [`render_json`] back into a tree.
pub fn parse_json(content: &str) -> MkdocResult<DocTree> {
	Ok(serde_json::from_str(content)?)
}

/// One line of the rendered tree.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum HtmlItem<'a> {
	/// Heading and opening `<div>` for a branch.
	Section {
		indent: String,
		level: usize,
		key: &'a str,
	},
	Close {
		indent: String,
	},
	Field {
		indent: String,
		key: &'a str,
		value: String,
	},
}

fn collect_html_items<'a>(tree: &'a DocTree, depth: usize, items: &mut Vec<HtmlItem<'a>>) {
	let indent = INDENT.repeat(depth);

	for (key, node) in tree.iter() {
		match node {
			DocNode::Branch(child) => {
				items.push(HtmlItem::Section {
					indent: indent.clone(),
					level: depth + BASE_HEADING_LEVEL,
					key,
				});
				collect_html_items(child, depth + 1, items);
				items.push(HtmlItem::Close {
					indent: indent.clone(),
				});
			}
			DocNode::Flag(flag) => {
				items.push(HtmlItem::Field {
					indent: indent.clone(),
					key,
					value: if *flag { "True" } else { "False" }.to_string(),
				});
			}
			DocNode::Text(text) => {
				items.push(HtmlItem::Field {
					indent: indent.clone(),
					key,
					value: text.clone(),
				});
			}
		}
	}
}

/// Render the tree as a standalone HTML page.
///
/// Branches become a heading (one level deeper per nesting depth, starting at
/// `<h2>`) followed by an indented `<div>`; scalars become `<p><b>key</b>:
/// value</p>` lines, with flags written as `True`/`False`. Keys and values
/// are HTML escaped.
pub fn render_html(tree: &DocTree, options: &HtmlOptions) -> MkdocResult<String> {
	let mut items = Vec::new();
	collect_html_items(tree, 0, &mut items);

	let mut env = Environment::new();
	env.set_trim_blocks(true);
	env.set_lstrip_blocks(true);
	env.add_template(HTML_TEMPLATE_NAME, HTML_TEMPLATE)?;

	let template = env.get_template(HTML_TEMPLATE_NAME)?;
	let html = template.render(context! {
		title => &options.title,
		heading => &options.heading,
		items => items,
	})?;

	Ok(html)
}
