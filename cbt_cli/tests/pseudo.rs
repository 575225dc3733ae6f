mod common;

use cbt_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn pseudo_prints_the_generated_locale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path())?;

	let output = common::cbt_cmd()
		.arg("pseudo")
		.arg(tmp.path().join("locales/strings_en.json"))
		.arg("--seed")
		.arg("3")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let pseudo: Value = serde_json::from_slice(&output)?;

	let greeting = pseudo["GREETING"].as_str().unwrap_or_default();
	assert!(greeting.starts_with("[Ħı ${user}, <b>ѡėłçøӎė</b>!-"));
	assert!(greeting.ends_with("-:토성]"));

	let button = pseudo["BUTTON_OK"].as_str().unwrap_or_default();
	assert!(button.starts_with("[ÔҠ-"));
	assert!(button.ends_with("-:극지]"));

	Ok(())
}

#[test]
fn verbose_pseudo_keeps_stdout_as_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path())?;

	let assert = common::cbt_cmd()
		.arg("pseudo")
		.arg("-v")
		.arg("--path")
		.arg(tmp.path())
		.arg(tmp.path().join("locales/strings_en.json"))
		.arg("--seed")
		.arg("1")
		.assert()
		.success()
		.stderr(predicates::str::contains("no config file found"));
	let pseudo: Value = serde_json::from_slice(&assert.get_output().stdout)?;

	assert!(pseudo["BUTTON_OK"].is_string());

	Ok(())
}

#[test]
fn pseudo_is_reproducible_with_a_seed() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path())?;
	let file = tmp.path().join("locales/strings_en.json");

	let run = || {
		common::cbt_cmd()
			.arg("pseudo")
			.arg(&file)
			.arg("--seed")
			.arg("11")
			.assert()
			.success()
			.get_output()
			.stdout
			.clone()
	};

	assert_eq!(run(), run());

	Ok(())
}

#[test]
fn pseudo_key_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(tmp.path(), &[("strings_en.json", r#"{"Z":"1","A":"2","M":"3"}"#)])?;

	common::cbt_cmd()
		.arg("pseudo")
		.arg("--key-order")
		.arg(tmp.path().join("strings_en.json"))
		.assert()
		.success()
		.stdout("[\n  \"Z\",\n  \"A\",\n  \"M\"\n]\n");

	Ok(())
}

#[test]
fn pseudo_rejects_non_string_values() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(tmp.path(), &[("strings_en.json", r#"{"COUNT":3}"#)])?;

	common::cbt_cmd()
		.arg("pseudo")
		.arg(tmp.path().join("strings_en.json"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("COUNT"));

	Ok(())
}

#[test]
fn pseudo_reports_missing_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::cbt_cmd()
		.arg("pseudo")
		.arg(tmp.path().join("missing.json"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("missing.json"));

	Ok(())
}
