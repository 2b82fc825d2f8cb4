#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use mkdoc_core::AnyEmptyResult;

pub fn mkdoc_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("mkdoc"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;

	Ok(())
}

pub fn declaration(name: &str, value: &str) -> String {
	format!("/*back_start*/\n#ifndef {name}\n#define {name} \"{value}\"\n#endif\n/*back_end*/\n")
}
