use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use rand::RngCore;

use crate::CbtConfig;
use crate::CbtError;
use crate::CbtResult;
use crate::CompiledTemplate;
use crate::LocaleBundle;
use crate::LocaleSource;
use crate::assemble;
use crate::discover::display_relative;
use crate::discover::expand_patterns;
use crate::discover::locale_tag;
use crate::locales::EMPTY_LOCALES_MODULE;
use crate::locales::render_locale_modules;
use crate::locales::render_locales_module;
use crate::templates::EMPTY_TEMPLATES_MODULE;
use crate::templates::render_templates_module;
use crate::writer::write_output;

/// Which generated modules a build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
	/// Locales first, then templates importing the locale module.
	All,
	Locales,
	Templates,
}

impl BuildTarget {
	fn includes_locales(self) -> bool {
		matches!(self, Self::All | Self::Locales)
	}

	fn includes_templates(self) -> bool {
		matches!(self, Self::All | Self::Templates)
	}
}

/// Compiled locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleOutput {
	/// One module containing every locale.
	Single(String),
	/// One module per locale tag.
	PerLocale(BTreeMap<String, String>),
}

/// A generated file and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
	pub path: PathBuf,
	pub content: String,
}

impl OutputFile {
	/// Whether the file on disk already holds exactly this content.
	pub fn is_current(&self) -> bool {
		std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content)
	}
}

/// Read a source file, trimming surrounding whitespace.
pub fn read_source(path: &Path) -> CbtResult<String> {
	std::fs::read_to_string(path)
		.map(|content| content.trim().to_string())
		.map_err(|e| CbtError::ReadFile {
			path: path.display().to_string(),
			reason: e.to_string(),
		})
}

/// Discover and read every locale file configured for the project at
/// `root`.
pub fn read_locale_sources(root: &Path, config: &CbtConfig) -> CbtResult<Vec<LocaleSource>> {
	expand_patterns(root, &config.locales.files)?
		.iter()
		.map(|path| {
			let tag = locale_tag(path)?;
			let content = read_source(path)?;
			Ok(LocaleSource::new(tag, display_relative(root, path), content))
		})
		.collect()
}

/// Assemble the project's locale files into a bundle. Returns `None` when no
/// locale file matches the configured patterns.
pub fn bundle_locales<R: RngCore>(
	root: &Path,
	config: &CbtConfig,
	rng: &mut R,
) -> CbtResult<Option<LocaleBundle>> {
	let sources = read_locale_sources(root, config)?;
	if sources.is_empty() {
		return Ok(None);
	}

	assemble(&sources, &config.locales.assemble_options(), rng).map(Some)
}

/// Compile the project's locale files into module code.
///
/// Without locale files the result is the stub module when
/// `always_return_file` is set, and `None` otherwise.
pub fn compile_locales<R: RngCore>(
	root: &Path,
	config: &CbtConfig,
	rng: &mut R,
) -> CbtResult<Option<LocaleOutput>> {
	let started = Instant::now();

	let Some(bundle) = bundle_locales(root, config, rng)? else {
		tracing::info!(root = %root.display(), "no locale files found");
		return Ok(config
			.always_return_file
			.then(|| LocaleOutput::Single(EMPTY_LOCALES_MODULE.to_string())));
	};

	let output = if config.locales.separate_by_locale {
		LocaleOutput::PerLocale(render_locale_modules(&bundle))
	} else {
		LocaleOutput::Single(render_locales_module(
			&bundle,
			&config.locales.default_locale_variable,
		))
	};

	tracing::info!(
		locales = bundle.locales.len(),
		keys = bundle.keys.len(),
		elapsed = ?started.elapsed(),
		"compiled locales"
	);

	Ok(Some(output))
}

/// Compile the project's template files into module code.
///
/// `locales_module` is the file name of a combined locale module the
/// templates should import.
pub fn compile_templates(
	root: &Path,
	config: &CbtConfig,
	locales_module: Option<&str>,
) -> CbtResult<Option<String>> {
	let started = Instant::now();
	let files = expand_patterns(root, &config.templates.files)?;

	if files.is_empty() {
		tracing::info!(root = %root.display(), "no template files found");
		return Ok(config
			.always_return_file
			.then(|| EMPTY_TEMPLATES_MODULE.to_string()));
	}

	let templates = files
		.iter()
		.map(|path| {
			let content = read_source(path)?;
			CompiledTemplate::compile(
				&display_relative(root, path),
				&content,
				config.templates.min_whitespace,
			)
		})
		.collect::<CbtResult<Vec<_>>>()?;

	let output = render_templates_module(&templates, locales_module)?;

	tracing::info!(
		templates = templates.len(),
		elapsed = ?started.elapsed(),
		"compiled templates"
	);

	Ok(Some(output))
}

/// Compute every file a build of `target` would write, without touching
/// the output directory.
pub fn plan_build<R: RngCore>(
	root: &Path,
	config: &CbtConfig,
	target: BuildTarget,
	rng: &mut R,
) -> CbtResult<Vec<OutputFile>> {
	let output_dir = config.output_path(root);
	let combined_locales = output_dir.join(&config.locales.output_name);
	let mut files = Vec::new();
	let mut locales_module = None;

	if target.includes_locales() {
		match compile_locales(root, config, rng)? {
			Some(LocaleOutput::Single(content)) => {
				locales_module = Some(config.locales.output_name.as_str());
				files.push(OutputFile {
					path: combined_locales,
					content,
				});
			}
			Some(LocaleOutput::PerLocale(modules)) => {
				if target.includes_templates() {
					tracing::warn!(
						"templates cannot import per-locale modules; `lang` will not be available"
					);
				}
				files.extend(modules.into_iter().map(|(tag, content)| OutputFile {
					path: output_dir.join(config.locales.per_locale_output_name(&tag)),
					content,
				}));
			}
			None => {}
		}
	} else if combined_locales.is_file() {
		locales_module = Some(config.locales.output_name.as_str());
	}

	if target.includes_templates() {
		if let Some(content) = compile_templates(root, config, locales_module)? {
			files.push(OutputFile {
				path: output_dir.join(&config.templates.output_name),
				content,
			});
		}
	}

	Ok(files)
}

/// Write planned files, rotating backups when `backup` is set.
pub fn write_outputs(files: &[OutputFile], backup: bool) -> CbtResult<()> {
	for file in files {
		write_output(&file.path, &file.content, backup)?;
	}

	Ok(())
}
