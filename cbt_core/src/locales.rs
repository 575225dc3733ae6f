//! Rendering of an assembled [`LocaleBundle`] as ES modules.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::LocaleBundle;
use crate::LocaleOrigin;

/// Header line of every generated module.
pub const GENERATED_HEADER: &str = "// This is an auto generated file. Do not edit!\n";

/// Module emitted when no locale files exist and a file is required anyway.
pub const EMPTY_LOCALES_MODULE: &str = "export default () => ({});";

/// Render every locale into a single module.
///
/// The module exports `getLocaleStrings(locale)`, which resolves `xx-YY` to
/// `xx` and then to the default locale when a locale is not bundled, and
/// caches the key-to-string object it builds for each locale.
pub fn render_locales_module(bundle: &LocaleBundle, default_locale_variable: &str) -> String {
	let keys = Value::from(bundle.keys.clone());
	let last = bundle.locales.len().saturating_sub(1);

	let mut strings = String::from("{\n");
	for (index, (tag, locale)) in bundle.locales.iter().enumerate() {
		let separator = if index == last { "" } else { "," };
		strings.push_str(&format!(
			"  // {}\n  {}: {}{separator}\n",
			origin_comment(&locale.origin),
			Value::from(tag.as_str()),
			Value::Array(locale.values.clone()),
		));
	}
	strings.push('}');

	let default_locale = &bundle.default_locale;

	format!(
		"{GENERATED_HEADER}const strCache = {{}};
const strKeys = {keys};
const strs = {strings};

function getLocaleStrings(locale = {default_locale_variable}) {{
  // Fall back to the base language, then to the default locale.
  if (!strs[locale]) {{
    locale = locale.split('-')[0];
    if (!strs[locale]) {{
      locale = '{default_locale}';
    }}
  }}

  if (!strCache[locale]) {{
    strCache[locale] = strKeys.reduce((obj, key, i) => {{ obj[key] = strs[locale][i]; return obj; }}, {{}});
  }}

  return strCache[locale];
}}

export default getLocaleStrings;
"
	)
}

/// Render the module for a single locale, exporting its key-to-string
/// object. Returns `None` when `tag` is not part of the bundle.
pub fn render_locale_module(bundle: &LocaleBundle, tag: &str) -> Option<String> {
	let table = bundle.table(tag)?;
	let object = Value::Object(table.into_inner());

	Some(format!("{GENERATED_HEADER}export default () => ({object});\n"))
}

/// Render one module per locale, keyed by tag.
pub fn render_locale_modules(bundle: &LocaleBundle) -> BTreeMap<String, String> {
	bundle
		.tags()
		.filter_map(|tag| Some((tag.to_string(), render_locale_module(bundle, tag)?)))
		.collect()
}

fn origin_comment(origin: &LocaleOrigin) -> String {
	match origin {
		LocaleOrigin::File(path) => format!("Included locale file: ./{path}"),
		LocaleOrigin::Generated => "Generated locale".to_string(),
	}
}
