use std::path::Path;
use std::path::PathBuf;
use std::process;

use cbt_cli::CbtCli;
use cbt_cli::Commands;
use cbt_core::BuildTarget;
use cbt_core::CbtConfig;
use cbt_core::CbtError;
use cbt_core::LocaleTable;
use cbt_core::OutputFile;
use cbt_core::PSEUDO_LOCALE;
use cbt_core::PseudoLocaleBuilder;
use cbt_core::discover::display_relative;
use cbt_core::plan_build;
use cbt_core::read_source;
use cbt_core::seeded_rng;
use cbt_core::write_outputs;
use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = r#"# cbt configuration

# Directory, relative to this file, that receives the compiled modules.
output_dir = "_compiled"

# Emit stub modules when no source files are found.
# always_return_file = false

# Keep the previous output as `<file>.bak` before overwriting it.
# backup = false

[locales]
# Locale files. The locale tag is read from the `_<tag>.json` file name suffix.
files = ["locales/strings_*.json"]
default_locale = "en"
# JavaScript expression the locale module reads the active locale from.
# default_locale_variable = "document.documentElement.lang"
# Wrap untranslated strings as `-*text*-`.
# tag_missing_strings = true
# Generate the `eo` pseudo-locale.
# add_eo_locale = true
# Generate the `ke` locale, mapping every key to its own name.
# add_ke_locale = false
# Emit one module per locale instead of a single combined module.
# separate_by_locale = false
# output_name = "locales.mjs"
# Fix the pseudo-locale filler so builds are reproducible.
# seed = 1

[templates]
files = ["*.html"]
# Drop HTML comments and collapse runs of whitespace in template bodies.
# min_whitespace = true
# output_name = "templates.mjs"
"#;

fn main() {
	let args = CbtCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Build { dry_run }) => run_build(&args, BuildTarget::All, *dry_run),
		Some(Commands::Locales { dry_run }) => run_build(&args, BuildTarget::Locales, *dry_run),
		Some(Commands::Templates { dry_run }) => {
			run_build(&args, BuildTarget::Templates, *dry_run)
		}
		Some(Commands::Check { diff }) => run_check(&args, *diff),
		Some(Commands::Pseudo { file, key_order }) => run_pseudo(&args, file, *key_order),
		None => {
			eprintln!("No subcommand specified. Run `cbt --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render core errors through miette for error codes and help text.
		match e.downcast::<CbtError>() {
			Ok(cbt_err) => {
				let report: miette::Report = (*cbt_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` picks the level unless `--verbose` asks for
/// everything down to `debug`.
fn init_tracing(verbose: bool, use_color: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(use_color)
				.with_target(false),
		)
		.with(filter)
		.init();
}

fn resolve_root(args: &CbtCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Stdout carries command output only, so the config notice goes to the log.
fn load_config(root: &Path) -> Result<CbtConfig, Box<dyn std::error::Error>> {
	let config = CbtConfig::load_or_default(root)?;

	match CbtConfig::resolve_path(root) {
		Some(path) => tracing::debug!(path = %path.display(), "using config"),
		None => tracing::debug!("no config file found, using defaults"),
	}

	Ok(config)
}

/// The seed for the pseudo-locale filler: `--seed` first, then the config.
fn resolve_seed(args: &CbtCli, config: &CbtConfig) -> Option<u64> {
	args.seed.or(config.locales.seed)
}

fn run_init(args: &CbtCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = CbtConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("cbt.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created cbt.toml");
	println!();
	println!("Next steps:");
	println!("  1. Add locale files such as locales/strings_en.json");
	println!("  2. Run `cbt build` to compile them");

	Ok(())
}

fn run_build(
	args: &CbtCli,
	target: BuildTarget,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let seed = resolve_seed(args, &config);
	tracing::debug!(root = %root.display(), ?target, ?seed, "planning build");
	let mut rng = seeded_rng(seed);
	let files = plan_build(&root, &config, target, &mut rng)?;

	if files.is_empty() {
		println!("Nothing to compile: no locale or template files found.");
		return Ok(());
	}

	if dry_run {
		println!("Dry run: would write {} file(s):", files.len());
		for file in &files {
			println!(
				"  {} ({} bytes)",
				display_relative(&root, &file.path),
				file.content.len()
			);
		}
		return Ok(());
	}

	write_outputs(&files, config.backup)?;

	for file in &files {
		println!("  wrote {}", display_relative(&root, &file.path));
	}
	println!(
		"{}",
		colored!(format!("Compiled {} file(s).", files.len()), green)
	);

	Ok(())
}

fn run_check(args: &CbtCli, show_diff: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let seed = resolve_seed(args, &config);

	if seed.is_none() && config.locales.add_eo_locale {
		eprintln!(
			"{} no seed configured; the generated `{PSEUDO_LOCALE}` locale differs on every \
			 build",
			colored!("warning:", yellow)
		);
	}

	let mut rng = seeded_rng(seed);
	let files = plan_build(&root, &config, BuildTarget::All, &mut rng)?;
	let stale: Vec<&OutputFile> = files.iter().filter(|file| !file.is_current()).collect();

	if stale.is_empty() {
		println!("Check passed: all compiled modules are up to date.");
		return Ok(());
	}

	eprintln!("Check failed.");
	eprintln!();
	eprintln!("Stale modules:");
	for file in &stale {
		let rel = display_relative(&root, &file.path);
		match std::fs::read_to_string(&file.path) {
			Ok(current) => {
				eprintln!("  {rel}");
				if show_diff {
					print_diff(&current, &file.content);
				}
			}
			Err(_) => eprintln!("  {rel} (missing)"),
		}
	}

	eprintln!();
	eprintln!(
		"{} module(s) are out of date. Run `cbt build` to fix.",
		stale.len()
	);
	process::exit(1);
}

fn run_pseudo(
	args: &CbtCli,
	file: &Path,
	key_order: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let origin = file.display().to_string();
	let table = LocaleTable::parse(&origin, &read_source(file)?)?;

	if key_order {
		println!("{}", serde_json::to_string_pretty(&table.key_order())?);
		return Ok(());
	}

	let config = load_config(&root)?;
	let pseudo = PseudoLocaleBuilder::from_seed_option(resolve_seed(args, &config)).build(&table)?;
	println!("{}", serde_json::to_string_pretty(&pseudo)?);

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
