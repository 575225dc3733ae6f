use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CbtError {
	#[error(transparent)]
	#[diagnostic(code(cbt::io_error))]
	Io(#[from] std::io::Error),

	#[error("unable to parse locale file `{origin}`: {reason}")]
	#[diagnostic(
		code(cbt::locale_parse),
		help("locale files must contain a single JSON object mapping keys to strings")
	)]
	LocaleParseError { origin: String, reason: String },

	#[error("locale file for default locale `{locale}` was not found")]
	#[diagnostic(
		code(cbt::missing_default_locale),
		help("add a `strings_{locale}.json` file or change `default_locale` in cbt.toml")
	)]
	MissingDefaultLocale { locale: String },

	#[error("locale value for key `{key}` must be a string, found {found}")]
	#[diagnostic(code(cbt::invalid_value_type))]
	InvalidValueType { key: String, found: String },

	#[error("invalid template name: `{path}`")]
	#[diagnostic(
		code(cbt::invalid_template_name),
		help("template file names can only use `$`, `_` or alphanumeric characters")
	)]
	InvalidTemplateName { path: String },

	#[error("duplicate template `{name}`: defined in `{first}` and `{second}`")]
	#[diagnostic(
		code(cbt::duplicate_template_name),
		help("each template file name must be unique across the configured patterns")
	)]
	DuplicateTemplateName {
		name: String,
		first: String,
		second: String,
	},

	#[error("only `import` is allowed in `<% %>` blocks, found `{line}` in `{path}`")]
	#[diagnostic(code(cbt::invalid_import_directive))]
	InvalidImportDirective { path: String, line: String },

	#[error("cannot determine the locale of `{path}`")]
	#[diagnostic(
		code(cbt::invalid_locale_file_name),
		help("locale file names must end with `_<locale>.json`, e.g. `strings_en.json`")
	)]
	InvalidLocaleFileName { path: String },

	#[error("invalid file pattern `{pattern}`: {reason}")]
	#[diagnostic(code(cbt::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(code(cbt::read_file))]
	ReadFile { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(cbt::config_parse),
		help("check that cbt.toml is valid TOML with [locales] and/or [templates] sections")
	)]
	ConfigParse(String),

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(cbt::symlink_cycle),
		help("remove the circular symlink or narrow the file patterns")
	)]
	SymlinkCycle { path: String },
}

pub type CbtResult<T> = Result<T, CbtError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
