use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::GlobBuilder;
use globset::GlobMatcher;

use crate::CbtError;
use crate::CbtResult;

/// Expand `patterns` into a list of files below `root`.
///
/// Patterns are relative to `root`. A pattern containing glob syntax is
/// matched against root-relative paths (`*` stays within one directory,
/// `**` crosses directories) and its matches are sorted. A pattern without
/// glob syntax is kept as a literal path even when the file does not exist,
/// so that reading it reports the missing file. Files matched by several
/// patterns are listed once, at their first position.
pub fn expand_patterns(root: &Path, patterns: &[String]) -> CbtResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	let mut seen = HashSet::new();

	for pattern in patterns {
		let pattern = normalize_pattern(pattern);

		if !has_glob_syntax(&pattern) {
			let path = root.join(&pattern);
			if seen.insert(path.clone()) {
				files.push(path);
			}
			continue;
		}

		let matcher = build_matcher(&pattern)?;

		for path in collect_candidates(root, &pattern)? {
			let Ok(relative) = path.strip_prefix(root) else {
				continue;
			};
			if matcher.is_match(relative) && seen.insert(path.clone()) {
				tracing::debug!(%pattern, path = %path.display(), "matched file");
				files.push(path);
			}
		}
	}

	Ok(files)
}

/// Whether `pattern` contains any glob metacharacters.
pub fn has_glob_syntax(pattern: &str) -> bool {
	pattern.contains(['*', '?', '[', '{'])
}

/// Read the locale tag from a file name of the form `<name>_<tag>.json`.
pub fn locale_tag(path: &Path) -> CbtResult<String> {
	let invalid = || CbtError::InvalidLocaleFileName {
		path: path.display().to_string(),
	};

	let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
	let stem = file_name.strip_suffix(".json").ok_or_else(invalid)?;
	let (_, tag) = stem.rsplit_once('_').ok_or_else(invalid)?;

	if tag.is_empty() {
		return Err(invalid());
	}

	Ok(tag.to_string())
}

/// Path of `path` relative to `root` with forward slashes, for display in
/// generated code.
pub fn display_relative(root: &Path, path: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.to_string_lossy()
		.replace('\\', "/")
}

fn normalize_pattern(pattern: &str) -> String {
	let pattern = pattern.replace('\\', "/");
	pattern
		.strip_prefix("./")
		.map_or_else(|| pattern.clone(), ToString::to_string)
}

fn build_matcher(pattern: &str) -> CbtResult<GlobMatcher> {
	GlobBuilder::new(pattern)
		.literal_separator(true)
		.build()
		.map(|glob| glob.compile_matcher())
		.map_err(|e| CbtError::InvalidPattern {
			pattern: pattern.to_string(),
			reason: e.to_string(),
		})
}

/// Collect the files `pattern` could match, sorted for deterministic
/// ordering.
///
/// The walk starts at the pattern's literal prefix (`node_modules/widgets`
/// for `node_modules/widgets/*.html`). Below it, hidden directories,
/// `node_modules` and `target` are only entered when the pattern names them
/// in a literal segment.
fn collect_candidates(root: &Path, pattern: &str) -> CbtResult<Vec<PathBuf>> {
	let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
	let base = segments
		.iter()
		.take_while(|segment| !has_glob_syntax(segment))
		.fold(root.to_path_buf(), |dir, segment| dir.join(segment));
	let named: HashSet<&str> = segments
		.iter()
		.copied()
		.filter(|segment| !has_glob_syntax(segment))
		.collect();

	let mut walk = Walk {
		named,
		ancestors: Vec::new(),
		files: Vec::new(),
	};
	walk.dir(&base)?;
	walk.files.sort();
	Ok(walk.files)
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

struct Walk<'a> {
	/// Literal segments of the pattern being expanded.
	named: HashSet<&'a str>,
	/// Canonical paths of the directories on the current walk path.
	ancestors: Vec<PathBuf>,
	files: Vec<PathBuf>,
}

impl Walk<'_> {
	fn dir(&mut self, dir: &Path) -> CbtResult<()> {
		if !dir.is_dir() {
			return Ok(());
		}

		// Only a directory that is its own ancestor is a cycle. Two links to
		// the same directory are walked twice.
		let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
		if self.ancestors.contains(&canonical) {
			return Err(CbtError::SymlinkCycle {
				path: dir.display().to_string(),
			});
		}
		self.ancestors.push(canonical);

		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				if path
					.file_name()
					.and_then(|n| n.to_str())
					.is_some_and(|name| self.skips(name))
				{
					continue;
				}
				self.dir(&path)?;
			} else if path.is_file() {
				self.files.push(path);
			}
		}

		self.ancestors.pop();
		Ok(())
	}

	fn skips(&self, name: &str) -> bool {
		is_ignored_directory_name(name) && !self.named.contains(name)
	}
}
