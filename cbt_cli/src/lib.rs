use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Bundle locale strings and HTML templates into importable JavaScript modules.",
	long_about = "cbt (compile bundle tool) turns a project's `strings_<locale>.json` files and \
	              HTML templates into ES modules, and generates an `eo` pseudo-locale that makes \
	              untranslated, truncated or badly encoded text easy to spot.\n\nQuick start:\n  \
	              cbt init    Create a cbt.toml file\n  cbt build   Compile locales and \
	              templates\n  cbt check   Verify the compiled modules are up to date\n  cbt \
	              pseudo  Print the pseudo-locale of one locale file"
)]
pub struct CbtCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Seed for the pseudo-locale filler. Overrides `locales.seed` from
	/// `cbt.toml`. Without a seed the filler changes on every run.
	#[arg(long, global = true)]
	pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `cbt.toml` in the project root.
	///
	/// If a config file already exists this command is a no-op and exits
	/// successfully.
	Init,
	/// Compile locales and templates into the output directory.
	///
	/// Locale files are compiled first so the template module can import the
	/// combined locale module.
	Build {
		/// Print which files would be written without touching the output
		/// directory.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Compile only the locale files.
	Locales {
		/// Print which files would be written without touching the output
		/// directory.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Compile only the template files.
	///
	/// The template module imports the combined locale module when it
	/// already exists in the output directory.
	Templates {
		/// Print which files would be written without touching the output
		/// directory.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that the compiled modules on disk are up to date.
	///
	/// Recompiles the project in memory and compares the result with the
	/// files in the output directory. Exits with a non-zero status code when
	/// any file is missing or stale. The generated pseudo-locale only
	/// compares equal when a seed is configured.
	Check {
		/// Show a unified diff for each stale file.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// Print the pseudo-locale generated from a single locale file.
	Pseudo {
		/// JSON locale file to transform.
		file: PathBuf,

		/// Print the file's key order instead of the generated strings.
		#[arg(long, default_value_t = false)]
		key_order: bool,
	},
}
