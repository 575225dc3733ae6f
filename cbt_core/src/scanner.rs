//! Character scanner that separates translatable text from the markup and
//! interpolation placeholders embedded in locale strings.
//!
//! ```text
//! Hi ${user}, <b>welcome</b>!
//! ^^^        ^   ^^^^^^^    ^   literal (handed to the transform)
//!    ^^^^^^^     ^^^     ^^^^   placeholder / markup (copied verbatim)
//! ```

/// State of the scanner between two characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
	/// Outside of any span. Characters here are transformed.
	#[default]
	Literal,
	/// Inside `<...>`. Left on the first `>`; nesting is not tracked.
	Markup,
	/// Inside `${...}` or `%{...}`. Left on the first `}`.
	Placeholder,
}

/// What the scanner does with the character it just consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	/// Copy the character to the output unchanged.
	Keep,
	/// Hand the character to the transform callback.
	Transform,
}

impl ScanState {
	/// Consume `current` (with one character of lookahead) and return what to
	/// do with it together with the state for the next character.
	///
	/// Span exits are checked before span entries, and new spans can only be
	/// entered from [`ScanState::Literal`].
	#[must_use]
	pub fn step(self, current: char, following: Option<char>) -> (Disposition, Self) {
		match self {
			Self::Markup => {
				let next = if current == '>' {
					Self::Literal
				} else {
					Self::Markup
				};
				(Disposition::Keep, next)
			}
			Self::Placeholder => {
				let next = if current == '}' {
					Self::Literal
				} else {
					Self::Placeholder
				};
				(Disposition::Keep, next)
			}
			Self::Literal if current == '<' => (Disposition::Keep, Self::Markup),
			Self::Literal if matches!(current, '$' | '%') && following == Some('{') => {
				(Disposition::Keep, Self::Placeholder)
			}
			Self::Literal => (Disposition::Transform, Self::Literal),
		}
	}
}

/// Apply `transform` to every literal character of `source`, copying markup
/// and placeholder spans through untouched.
///
/// An unterminated span simply runs to the end of the string.
pub fn scan(source: &str, mut transform: impl FnMut(char) -> char) -> String {
	let mut output = String::with_capacity(source.len());
	let mut state = ScanState::Literal;
	let mut chars = source.chars().peekable();

	while let Some(current) = chars.next() {
		let (disposition, next) = state.step(current, chars.peek().copied());
		match disposition {
			Disposition::Keep => output.push(current),
			Disposition::Transform => output.push(transform(current)),
		}
		state = next;
	}

	output
}
