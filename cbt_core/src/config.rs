use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::AssembleOptions;
use crate::CbtError;
use crate::CbtResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["cbt.toml", ".cbt.toml", ".config/cbt.toml"];

/// Configuration loaded from a `cbt.toml` file.
///
/// ```toml
/// output_dir = "_compiled"
/// always_return_file = false
/// backup = false
///
/// [locales]
/// files = ["locales/strings_*.json"]
/// default_locale = "en"
/// default_locale_variable = "document.documentElement.lang"
/// tag_missing_strings = true
/// add_eo_locale = true
/// add_ke_locale = false
/// separate_by_locale = false
/// output_name = "locales.mjs"
/// seed = 7
///
/// [templates]
/// files = ["*.html"]
/// min_whitespace = true
/// output_name = "templates.mjs"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CbtConfig {
	/// Directory, relative to the project root, that receives the generated
	/// modules.
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	/// Emit a stub module when no source files match instead of emitting
	/// nothing.
	#[serde(default)]
	pub always_return_file: bool,
	/// Move an existing output file to `<file>.bak` before overwriting it.
	#[serde(default)]
	pub backup: bool,
	#[serde(default)]
	pub locales: LocalesConfig,
	#[serde(default)]
	pub templates: TemplatesConfig,
}

/// Settings for the `[locales]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct LocalesConfig {
	/// Glob patterns of locale files, relative to the project root. The
	/// locale tag is read from the `_<tag>.json` end of each file name.
	#[serde(default = "default_locale_files")]
	pub files: Vec<String>,
	/// Authoritative locale for keys and fallback values.
	#[serde(default = "default_locale")]
	pub default_locale: String,
	/// JavaScript expression the generated module reads the active locale
	/// from when none is passed.
	#[serde(default = "default_locale_variable")]
	pub default_locale_variable: String,
	/// Wrap fallback values as `-*value*-`.
	#[serde(default = "default_true")]
	pub tag_missing_strings: bool,
	/// Generate the `eo` pseudo-locale when no `eo` file exists.
	#[serde(default = "default_true")]
	pub add_eo_locale: bool,
	/// Generate the `ke` locale mapping every key to its own name.
	#[serde(default)]
	pub add_ke_locale: bool,
	/// Emit one module per locale instead of a single combined module.
	#[serde(default)]
	pub separate_by_locale: bool,
	/// File name of the combined module. Per-locale modules insert `_<tag>`
	/// before the extension.
	#[serde(default = "default_locales_output_name")]
	pub output_name: String,
	/// Seed for the pseudo-locale filler. Without it the filler differs on
	/// every build.
	#[serde(default)]
	pub seed: Option<u64>,
}

/// Settings for the `[templates]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
	/// Glob patterns of HTML template files, relative to the project root.
	#[serde(default = "default_template_files")]
	pub files: Vec<String>,
	/// Drop HTML comments and collapse runs of whitespace in template bodies
	/// to a single space.
	#[serde(default = "default_true")]
	pub min_whitespace: bool,
	/// File name of the generated template module.
	#[serde(default = "default_templates_output_name")]
	pub output_name: String,
}

fn default_output_dir() -> PathBuf {
	PathBuf::from("_compiled")
}

fn default_locale_files() -> Vec<String> {
	vec!["locales/strings_*.json".to_string()]
}

fn default_locale() -> String {
	"en".to_string()
}

fn default_locale_variable() -> String {
	"document.documentElement.lang".to_string()
}

fn default_locales_output_name() -> String {
	"locales.mjs".to_string()
}

fn default_template_files() -> Vec<String> {
	vec!["*.html".to_string()]
}

fn default_templates_output_name() -> String {
	"templates.mjs".to_string()
}

fn default_true() -> bool {
	true
}

impl Default for CbtConfig {
	fn default() -> Self {
		Self {
			output_dir: default_output_dir(),
			always_return_file: false,
			backup: false,
			locales: LocalesConfig::default(),
			templates: TemplatesConfig::default(),
		}
	}
}

impl Default for LocalesConfig {
	fn default() -> Self {
		Self {
			files: default_locale_files(),
			default_locale: default_locale(),
			default_locale_variable: default_locale_variable(),
			tag_missing_strings: true,
			add_eo_locale: true,
			add_ke_locale: false,
			separate_by_locale: false,
			output_name: default_locales_output_name(),
			seed: None,
		}
	}
}

impl Default for TemplatesConfig {
	fn default() -> Self {
		Self {
			files: default_template_files(),
			min_whitespace: true,
			output_name: default_templates_output_name(),
		}
	}
}

impl LocalesConfig {
	/// The assembly flags carried by this section.
	pub fn assemble_options(&self) -> AssembleOptions {
		AssembleOptions {
			default_locale: self.default_locale.clone(),
			tag_missing_strings: self.tag_missing_strings,
			add_eo_locale: self.add_eo_locale,
			add_ke_locale: self.add_ke_locale,
		}
	}

	/// File name of the per-locale module for `tag`: `locales.mjs` becomes
	/// `locales_fr.mjs`.
	pub fn per_locale_output_name(&self, tag: &str) -> String {
		let path = Path::new(&self.output_name);
		match (
			path.file_stem().and_then(|s| s.to_str()),
			path.extension().and_then(|e| e.to_str()),
		) {
			(Some(stem), Some(ext)) => format!("{stem}_{tag}.{ext}"),
			_ => format!("{}_{tag}", self.output_name),
		}
	}
}

impl CbtConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> CbtResult<Option<CbtConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Load the discovered config or fall back to defaults.
	pub fn load_or_default(root: &Path) -> CbtResult<CbtConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	pub fn parse(content: &str) -> CbtResult<CbtConfig> {
		toml::from_str(content).map_err(|e| CbtError::ConfigParse(e.to_string()))
	}

	/// Absolute directory that receives generated modules.
	pub fn output_path(&self, root: &Path) -> PathBuf {
		root.join(&self.output_dir)
	}
}
