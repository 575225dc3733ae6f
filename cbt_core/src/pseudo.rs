use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::CbtError;
use crate::CbtResult;
use crate::LocaleTable;
use crate::expand::expand;
use crate::expand::utf16_len;
use crate::hash::key_hash;
use crate::scanner::scan;
use crate::substitute::substitute;
use crate::table::value_kind;

/// Tag of the generated pseudo-locale.
pub const PSEUDO_LOCALE: &str = "eo";

/// Short non-Latin tokens appended to every pseudo-locale entry, selected
/// by `hash % 50`.
pub const MIXED_LANGUAGE_SUFFIXES: [&str; 50] = [
	// Japanese
	"鼻毛", "指先", "眉毛", "ひれ", "ヘビ", "カブ", "子供", "日本", "言語", "馬鹿",
	// Korean
	"영어", "소금", "트럭", "히피", "포크", "토성", "아픈", "오리", "얼음", "극지",
	// Chinese
	"孩子", "嬉皮", "雲彩", "占星", "胡說", "膀胱", "沙拉", "蠢貨", "烘烤", "蝸牛",
	// Cyrillic
	"да", "ща", "по", "не", "из", "за", "Ий", "дя", "ИФ", "ья",
	// Accented Latin
	"Ãé", "Ûç", "Çó", "Ñá", "Ýň", "Èç", "Ìë", "Îú", "Öà", "Ūê",
];

/// The suffix token for a key hash.
pub fn suffix_for(hash: u32) -> &'static str {
	MIXED_LANGUAGE_SUFFIXES[hash as usize % MIXED_LANGUAGE_SUFFIXES.len()]
}

/// A standard generator seeded from `seed`, or from system entropy when no
/// seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
	seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Substitute every literal character of `value`, leaving markup and
/// placeholders untouched.
pub fn transform_body(hash: u32, value: &str) -> String {
	scan(value, |c| substitute(c, hash))
}

/// Builds pseudo-locale tables from the default locale.
///
/// Everything but the random run inside the filler is derived from the key
/// hash. Supply a seeded random source with [`PseudoLocaleBuilder::seeded`]
/// or [`PseudoLocaleBuilder::with_rng`] for byte-identical output.
#[derive(Debug)]
pub struct PseudoLocaleBuilder<R> {
	rng: R,
}

impl PseudoLocaleBuilder<StdRng> {
	/// A builder whose filler comes from an entropy-seeded generator.
	pub fn new() -> Self {
		Self::with_rng(StdRng::from_entropy())
	}

	pub fn seeded(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	/// Entropy-seeded unless `seed` is given.
	pub fn from_seed_option(seed: Option<u64>) -> Self {
		Self::with_rng(seeded_rng(seed))
	}
}

impl Default for PseudoLocaleBuilder<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: RngCore> PseudoLocaleBuilder<R> {
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Build the pseudo-locale entry for one key.
	///
	/// The result is `[` + transformed body + filler + suffix + `]`.
	pub fn entry(&mut self, key: &str, value: &str) -> String {
		let hash = key_hash(key);
		let body = transform_body(hash, value);
		let suffix = suffix_for(hash);
		let filler = expand(utf16_len(&body), utf16_len(suffix), &mut self.rng);

		format!("[{body}{filler}{suffix}]")
	}

	/// Build a pseudo-locale table with one entry per key of `source`, in the
	/// same order. Every value must be a string.
	pub fn build(&mut self, source: &LocaleTable) -> CbtResult<LocaleTable> {
		let mut table = LocaleTable::new();

		for (key, value) in source.iter() {
			let Value::String(text) = value else {
				return Err(CbtError::InvalidValueType {
					key: key.clone(),
					found: value_kind(value).to_string(),
				});
			};

			table.insert(key.clone(), Value::String(self.entry(key, text)));
		}

		Ok(table)
	}

	pub fn into_rng(self) -> R {
		self.rng
	}
}
