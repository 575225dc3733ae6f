use derive_more::Deref;
use derive_more::DerefMut;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::CbtError;
use crate::CbtResult;

/// The strings of one language: an ordered mapping of locale key to value.
///
/// Keys keep the insertion order of the source file. That order becomes the
/// canonical key order when this table belongs to the default locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable(Map<String, Value>);

impl LocaleTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse the JSON text of a locale file. `origin` names the source in the
	/// error when the text is not a JSON object.
	pub fn parse(origin: &str, content: &str) -> CbtResult<Self> {
		serde_json::from_str(content).map_err(|e| CbtError::LocaleParseError {
			origin: origin.to_string(),
			reason: e.to_string(),
		})
	}

	/// Keys in source order.
	pub fn key_order(&self) -> Vec<String> {
		self.0.keys().cloned().collect()
	}

	/// The string value stored under `key`, if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}

impl From<Map<String, Value>> for LocaleTable {
	fn from(value: Map<String, Value>) -> Self {
		Self(value)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for LocaleTable {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

/// Whether `value` would count as present in a JavaScript `a || b`
/// expression. Empty strings, `0`, `false` and `null` do not.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Human readable name of a JSON value's type, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
