use std::path::Path;
use std::path::PathBuf;

use crate::CbtResult;

/// Path of the backup kept for `path`: the same path with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
	let mut name = path.as_os_str().to_os_string();
	name.push(".bak");
	PathBuf::from(name)
}

/// Write `content` to `path`, creating missing parent directories.
///
/// With `backup` set, an existing file is first moved to `<path>.bak`,
/// replacing any older backup.
pub fn write_output(path: &Path, content: &str, backup: bool) -> CbtResult<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}

	if backup {
		let backup = backup_path(path);
		if backup.exists() {
			std::fs::remove_file(&backup)?;
		}
		if path.exists() {
			std::fs::rename(path, &backup)?;
			tracing::debug!(path = %backup.display(), "rotated backup");
		}
	}

	std::fs::write(path, content)?;
	tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");

	Ok(())
}
