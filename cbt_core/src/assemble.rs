use std::collections::BTreeMap;

use rand::RngCore;
use serde::Serialize;
use serde_json::Value;

use crate::CbtError;
use crate::CbtResult;
use crate::LocaleTable;
use crate::PSEUDO_LOCALE;
use crate::PseudoLocaleBuilder;
use crate::table::is_truthy;

/// Tag of the debug locale that maps every key to its own name.
pub const KEY_LOCALE: &str = "ke";

/// Unparsed text of one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSource {
	/// Language tag, e.g. `en`.
	pub tag: String,
	/// Where the text came from, used in diagnostics and in the emitted
	/// module's comments.
	pub origin: String,
	/// Raw JSON text.
	pub content: String,
}

impl LocaleSource {
	pub fn new(
		tag: impl Into<String>,
		origin: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			tag: tag.into(),
			origin: origin.into(),
			content: content.into(),
		}
	}

	/// Parse the source. Returns `None` when the content is blank, which
	/// means the file does not provide a locale at all.
	pub fn parse(&self) -> CbtResult<Option<ParsedLocale>> {
		let content = self.content.trim();
		if content.is_empty() {
			return Ok(None);
		}

		let table = LocaleTable::parse(&self.origin, content)?;

		Ok(Some(ParsedLocale {
			tag: self.tag.clone(),
			origin: LocaleOrigin::File(self.origin.clone()),
			table,
		}))
	}
}

/// A locale table together with its tag and origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocale {
	pub tag: String,
	pub origin: LocaleOrigin,
	pub table: LocaleTable,
}

impl ParsedLocale {
	pub fn new(tag: impl Into<String>, origin: impl Into<String>, table: LocaleTable) -> Self {
		Self {
			tag: tag.into(),
			origin: LocaleOrigin::File(origin.into()),
			table,
		}
	}
}

/// Where the strings of an assembled locale came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleOrigin {
	/// Read from a file; holds the project-relative path.
	File(String),
	/// Synthesized during assembly (`eo` or `ke`).
	Generated,
}

/// Flags controlling how locale tables are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AssembleOptions {
	/// Authoritative locale for keys and fallback values.
	pub default_locale: String,
	/// Wrap fallback values as `-*value*-` so missing translations stand out.
	pub tag_missing_strings: bool,
	/// Generate the `eo` pseudo-locale when no `eo` file exists.
	pub add_eo_locale: bool,
	/// Generate the `ke` key-name locale when no `ke` file exists.
	pub add_ke_locale: bool,
}

impl Default for AssembleOptions {
	fn default() -> Self {
		Self {
			default_locale: "en".to_string(),
			tag_missing_strings: true,
			add_eo_locale: true,
			add_ke_locale: false,
		}
	}
}

/// The strings of one language, aligned with [`LocaleBundle::keys`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledLocale {
	pub origin: LocaleOrigin,
	pub values: Vec<Value>,
}

/// Every language merged into one lookup structure in canonical key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleBundle {
	pub default_locale: String,
	/// Canonical key order, taken from the default locale's source.
	pub keys: Vec<String>,
	/// Assembled locales keyed by language tag, iterated in sorted order.
	pub locales: BTreeMap<String, AssembledLocale>,
}

impl LocaleBundle {
	/// Language tags in emission order.
	pub fn tags(&self) -> impl Iterator<Item = &str> {
		self.locales.keys().map(String::as_str)
	}

	/// The assembled strings of `tag` as a key-ordered table.
	pub fn table(&self, tag: &str) -> Option<LocaleTable> {
		let locale = self.locales.get(tag)?;
		Some(
			self.keys
				.iter()
				.cloned()
				.zip(locale.values.iter().cloned())
				.collect(),
		)
	}
}

/// Parse every source and assemble the result.
///
/// All sources are parsed before anything is merged, so a single malformed
/// file aborts the whole assembly.
pub fn assemble<R: RngCore>(
	sources: &[LocaleSource],
	options: &AssembleOptions,
	rng: &mut R,
) -> CbtResult<LocaleBundle> {
	let mut parsed = Vec::with_capacity(sources.len());

	for source in sources {
		match source.parse()? {
			Some(locale) => parsed.push(locale),
			None => tracing::debug!(origin = %source.origin, "skipping empty locale file"),
		}
	}

	assemble_tables(parsed, options, rng)
}

/// Merge already parsed locale tables.
pub fn assemble_tables<R: RngCore>(
	parsed: Vec<ParsedLocale>,
	options: &AssembleOptions,
	rng: &mut R,
) -> CbtResult<LocaleBundle> {
	let mut tables: BTreeMap<String, ParsedLocale> = BTreeMap::new();

	for locale in parsed {
		if let Some(previous) = tables.get(&locale.tag) {
			tracing::warn!(
				tag = %locale.tag,
				previous = ?previous.origin,
				current = ?locale.origin,
				"locale supplied more than once, keeping the last one"
			);
		}
		tables.insert(locale.tag.clone(), locale);
	}

	let Some(default) = tables.get(&options.default_locale) else {
		return Err(CbtError::MissingDefaultLocale {
			locale: options.default_locale.clone(),
		});
	};
	let default_table = default.table.clone();
	let keys = default_table.key_order();

	if options.add_eo_locale && !tables.contains_key(PSEUDO_LOCALE) {
		let table = PseudoLocaleBuilder::with_rng(&mut *rng).build(&default_table)?;
		tables.insert(PSEUDO_LOCALE.to_string(), ParsedLocale {
			tag: PSEUDO_LOCALE.to_string(),
			origin: LocaleOrigin::Generated,
			table,
		});
	}

	if options.add_ke_locale && !tables.contains_key(KEY_LOCALE) {
		let table = keys.iter().map(|key| (key.clone(), key.clone())).collect();
		tables.insert(KEY_LOCALE.to_string(), ParsedLocale {
			tag: KEY_LOCALE.to_string(),
			origin: LocaleOrigin::Generated,
			table,
		});
	}

	let locales = tables
		.into_iter()
		.map(|(tag, locale)| {
			let values = keys
				.iter()
				.map(|key| resolve_value(&locale.table, &default_table, key, options))
				.collect();
			(tag, AssembledLocale {
				origin: locale.origin,
				values,
			})
		})
		.collect();

	Ok(LocaleBundle {
		default_locale: options.default_locale.clone(),
		keys,
		locales,
	})
}

/// The value emitted for `key`: the locale's own value when it is truthy,
/// otherwise the default locale's value, tagged when configured.
fn resolve_value(
	table: &LocaleTable,
	default_table: &LocaleTable,
	key: &str,
	options: &AssembleOptions,
) -> Value {
	if let Some(value) = table.get(key).filter(|value| is_truthy(value)) {
		return value.clone();
	}

	let fallback = default_table.get(key).cloned().unwrap_or(Value::Null);
	if options.tag_missing_strings {
		Value::String(format!("-*{}*-", display_value(&fallback)))
	} else {
		fallback
	}
}

/// Text of a value as it appears inside a string template.
fn display_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
