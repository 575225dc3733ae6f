use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn cbt_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("cbt"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `files` (relative path, content) below `root`.
#[allow(dead_code)]
pub fn write_files(root: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
	for (relative, content) in files {
		let path = root.join(relative);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, content)?;
	}

	Ok(())
}

/// A small project with English and French strings and one template.
#[allow(dead_code)]
pub fn sample_project(root: &Path) -> std::io::Result<()> {
	write_files(root, &[
		(
			"locales/strings_en.json",
			r#"{"GREETING":"Hi ${user}, <b>welcome</b>!","BUTTON_OK":"OK"}"#,
		),
		("locales/strings_fr.json", r#"{"BUTTON_OK":"D'accord"}"#),
		("button.html", "<button>\n  ${lang.BUTTON_OK}\n</button>"),
	])
}
