mod common;

use cbt_core::AnyEmptyResult;
use cbt_core::CbtConfig;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::cbt_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created cbt.toml"));

	let content = std::fs::read_to_string(tmp.path().join("cbt.toml"))?;
	assert!(content.contains("[locales]"));
	assert!(content.contains("[templates]"));

	let config = CbtConfig::parse(&content)?;
	assert_eq!(config, CbtConfig::default());

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_path = tmp.path().join(".cbt.toml");
	std::fs::write(&config_path, "existing config")?;

	common::cbt_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(std::fs::read_to_string(&config_path)?, "existing config");
	assert!(!tmp.path().join("cbt.toml").exists());

	Ok(())
}

#[test]
fn missing_subcommand_is_a_usage_error() {
	common::cbt_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
