use std::path::Path;

use rand::rngs::mock::StepRng;
use serde_json::json;

use crate::AssembleOptions;
use crate::LocaleSource;
use crate::LocaleTable;

/// A random source that always yields zero, so every filler character is
/// `A`.
pub(crate) fn zero_rng() -> StepRng {
	StepRng::new(0, 0)
}

pub(crate) fn table(value: serde_json::Value) -> LocaleTable {
	serde_json::from_value(value).unwrap_or_else(|e| panic!("invalid fixture table: {e}"))
}

pub(crate) fn en_table() -> LocaleTable {
	table(json!({ "A": "x", "B": "y" }))
}

pub(crate) fn source(tag: &str, content: &str) -> LocaleSource {
	LocaleSource::new(tag, format!("locales/strings_{tag}.json"), content)
}

/// English `{A: x, B: y}` and French `{A: z}`.
pub(crate) fn en_fr_sources() -> Vec<LocaleSource> {
	vec![
		source("en", r#"{"A":"x","B":"y"}"#),
		source("fr", r#"{"A":"z"}"#),
	]
}

pub(crate) fn options_without_generated() -> AssembleOptions {
	AssembleOptions {
		add_eo_locale: false,
		..AssembleOptions::default()
	}
}

/// Write `files` (relative path, content) below `root`.
pub(crate) fn write_files(root: &Path, files: &[(&str, &str)]) {
	for (relative, content) in files {
		let path = root.join(relative);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create dir: {e}"));
		}
		std::fs::write(&path, content).unwrap_or_else(|e| panic!("write fixture: {e}"));
	}
}
