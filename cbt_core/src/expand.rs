use rand::Rng;

/// Characters the random part of the filler is drawn from.
pub const FILLER_ALPHABET: &[u8] =
	b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890 .-_!@#$%^&*=+";

/// Terminator appended to every filler, even an empty one.
pub const FILLER_TERMINATOR: &str = "-:";

/// Length of `value` in UTF-16 code units.
///
/// All length arithmetic uses this measure so generated output matches what
/// a JavaScript runtime reports for `string.length`.
pub fn utf16_len(value: &str) -> usize {
	value.encode_utf16().count()
}

/// The length a transformed string of `length` code units should grow to.
///
/// | length   | target      |
/// |----------|-------------|
/// | 1..=5    | 9           |
/// | 6..=25   | length × 1.9 |
/// | 26..=40  | length × 1.6 |
/// | 41..=70  | length × 1.3 |
/// | 0, > 70  | length      |
pub fn target_length(length: usize) -> f64 {
	let length_f = length as f64;
	match length {
		1..=5 => 9.0,
		6..=25 => length_f * 1.9,
		26..=40 => length_f * 1.6,
		41..=70 => length_f * 1.3,
		_ => length_f,
	}
}

/// Number of filler characters needed to bring `transformed_len +
/// suffix_len` up to the bucket target. Zero or negative means no filler.
pub fn filler_count(transformed_len: usize, suffix_len: usize) -> i64 {
	let combined = (transformed_len + suffix_len) as f64;
	round_half_up(target_length(transformed_len) - combined) as i64
}

/// Build the filler for `count` characters.
///
/// A positive count yields `-` followed by `count - 1` characters drawn
/// uniformly from [`FILLER_ALPHABET`]. The terminator `-:` is always
/// appended.
pub fn filler<R: Rng + ?Sized>(count: i64, rng: &mut R) -> String {
	let mut fill = String::new();

	if count > 0 {
		fill.push('-');
		for _ in 1..count {
			let index = rng.gen_range(0..FILLER_ALPHABET.len());
			fill.push(char::from(FILLER_ALPHABET[index]));
		}
	}

	fill.push_str(FILLER_TERMINATOR);
	fill
}

/// Filler for a transformed body and suffix of the given lengths.
pub fn expand<R: Rng + ?Sized>(transformed_len: usize, suffix_len: usize, rng: &mut R) -> String {
	filler(filler_count(transformed_len, suffix_len), rng)
}

/// Round to the nearest integer with halves going towards positive
/// infinity.
fn round_half_up(value: f64) -> f64 {
	(value + 0.5).floor()
}
