//! Lookalike substitution for literal characters.

/// Candidate lookalikes for `c`, or `None` when the character is kept as is.
///
/// Only ASCII letters have candidates, and not all of them: `p`, `Q` and `q`
/// have no entry and are always kept.
pub fn lookalikes(c: char) -> Option<&'static [char]> {
	let candidates: &'static [char] = match c {
		'A' => &['À', 'Á', 'Â', 'Ã', 'Ä', 'Å', 'Ā', 'Ą', 'Ă', 'Ѧ'],
		'B' => &['Ɓ', 'Ƀ', 'Ḃ'],
		'C' => &['Ç', 'Ć', 'Č', 'Ĉ', 'Ċ'],
		'D' => &['Ď', 'Đ'],
		'E' => &['È', 'É', 'Ê', 'Ë', 'Ē', 'Ę', 'Ě', 'Ĕ', 'Ė'],
		'F' => &['Ƒ', 'Ḟ'],
		'G' => &['Ĝ', 'Ğ', 'Ġ', 'Ģ'],
		'H' => &['Ĥ', 'Ħ'],
		'I' => &['Ì', 'Í', 'Î', 'Ï', 'Ī', 'Ĩ', 'Ĭ', 'Į', 'İ'],
		'J' => &['Ĵ', 'Ɉ'],
		'K' => &['Ķ', 'Ҟ', 'Ҡ'],
		'L' => &['Ł', 'Ľ', 'Ĺ', 'Ļ', 'Ŀ'],
		'M' => &['Ṁ', 'Ɯ', 'Ӎ'],
		'N' => &['Ñ', 'Ń', 'Ň', 'Ņ', 'Ŋ', 'П', 'И'],
		'O' => &['Ò', 'Ó', 'Ô', 'Õ', 'Ö', 'Ø', 'Ō', 'Ő', 'Ŏ'],
		'P' => &['Ƥ', 'Ṗ'],
		'R' => &['Ŕ', 'Ř', 'Ŗ', 'Я'],
		'S' => &['Ś', 'Š', 'Ş', 'Ŝ', 'Ș'],
		'T' => &['Ť', 'Ţ', 'Ŧ', 'Ț'],
		'U' => &['Ù', 'Ú', 'Û', 'Ü', 'Ū', 'Ů', 'Ű', 'Ŭ', 'Ũ', 'Ų', 'Ц'],
		'V' => &['Ѵ', 'Ѷ'],
		'W' => &['Ŵ', 'Ш', 'Щ', 'Ѡ'],
		'X' => &['Ж', 'Ҳ', 'Ӿ'],
		'Y' => &['Ý', 'Ŷ', 'Ÿ'],
		'Z' => &['Ź', 'Ž', 'Ż'],
		'a' => &['à', 'á', 'â', 'ã', 'ä', 'å', 'ā', 'ą', 'ă'],
		'b' => &['Б', 'Ъ', 'Ь', 'Ѣ'],
		'c' => &['ç', 'ć', 'č', 'ĉ', 'ċ'],
		'd' => &['ď', 'đ'],
		'e' => &['è', 'é', 'ê', 'ë', 'ē', 'ę', 'ě', 'ĕ', 'ė'],
		'f' => &['ƒ', 'ḟ'],
		'g' => &['ĝ', 'ğ', 'ġ', 'ģ'],
		'h' => &['ĥ', 'ħ'],
		'i' => &['ì', 'í', 'î', 'ï', 'ī', 'ĩ', 'ĭ', 'į', 'ı'],
		'j' => &['ĵ', 'ǰ', 'ɉ'],
		'k' => &['ķ', 'ĸ', 'ƙ', 'ǩ'],
		'l' => &['ł', 'ľ', 'ĺ', 'ļ', 'ŀ'],
		'm' => &['ṁ', 'ӎ'],
		'n' => &['ñ', 'ń', 'ň', 'ņ', 'ŉ', 'ŋ'],
		'o' => &['ò', 'ó', 'ô', 'õ', 'ö', 'ø', 'ō', 'ő', 'ŏ', 'Ф'],
		'r' => &['ŕ', 'ř', 'ŗ', 'я'],
		's' => &['ś', 'š', 'ş', 'ŝ', 'ș'],
		't' => &['ť', 'ţ', 'ŧ', 'ț'],
		'u' => &['ù', 'ú', 'û', 'ü', 'ū', 'ů', 'ű', 'ŭ', 'ũ', 'ų'],
		'v' => &['ѵ', 'ѷ'],
		'w' => &['ŵ', 'ѡ'],
		'x' => &['ӿ', 'ӽ', 'ж'],
		'y' => &['ý', 'ÿ', 'ŷ', 'Ч', 'Ѱ'],
		'z' => &['ž', 'ż', 'ź'],
		_ => return None,
	};

	Some(candidates)
}

/// Replace `c` with one of its lookalikes, chosen by `hash`.
///
/// The choice depends only on the character and the key hash, so every
/// occurrence of a letter within one string maps to the same lookalike.
pub fn substitute(c: char, hash: u32) -> char {
	match lookalikes(c) {
		Some(candidates) => candidates[hash as usize % candidates.len()],
		None => c,
	}
}
