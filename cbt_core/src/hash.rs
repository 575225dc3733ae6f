/// Hash a locale key into the selection index used by the pseudo-locale
/// engine.
///
/// This is the classic `h * 31 + c` string hash computed over UTF-16 code
/// units with 32-bit signed wraparound at every step. The absolute value of
/// the final signed result is returned, so `i32::MIN` becomes `2147483648`.
///
/// The arithmetic must stay bit-for-bit stable: every character substitution
/// and suffix choice in previously generated pseudo-locales depends on it.
///
/// ```
/// use cbt_core::key_hash;
///
/// assert_eq!(key_hash(""), 0);
/// assert_eq!(key_hash("A"), 65);
/// assert_eq!(key_hash("BUTTON_OK"), 1_496_764_919);
/// ```
pub fn key_hash(key: &str) -> u32 {
	key.encode_utf16()
		.fold(0i32, |hash, unit| {
			hash.wrapping_mul(31).wrapping_add(i32::from(unit))
		})
		.unsigned_abs()
}
