//! File logging under the platform cache directory.
//!
//! - Linux: `$XDG_CACHE_HOME/palette-report` or `~/.cache/palette-report`
//! - macOS: `~/Library/Caches/dev.colorview.palette-report`
//! - Windows: `C:\Users\<User>\AppData\Local\colorview\palette-report\cache`

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::CliError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "colorview";
const APPLICATION: &str = "palette-report";

/// Path of the log file, or None if no home directory can be found.
pub fn log_file() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().join("latest.log"))
}

/// Install a file logger at `level`. `LevelFilter::Off` installs nothing.
pub fn init(level: LevelFilter) -> Result<(), CliError> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = log_file().ok_or(CliError::NoLogDir)?;
    let file = create_log_file(&path)?;

    WriteLogger::init(level, Config::default(), file)
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Create (or truncate) the log file at `path`, making parent dirs as needed.
fn create_log_file(path: &Path) -> Result<File, CliError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| CliError::LogFile {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| CliError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_failure_is_a_log_file_error() {
        let blocker = std::env::temp_dir().join(format!("palette-report-{}", std::process::id()));
        fs::write(&blocker, b"").unwrap();

        let err = create_log_file(&blocker.join("logs").join("latest.log")).unwrap_err();
        fs::remove_file(&blocker).unwrap();

        assert!(matches!(err, CliError::LogFile { .. }));
        assert!(err.to_string().starts_with("failed to create log file"));
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let root = std::env::temp_dir().join(format!("palette-report-dirs-{}", std::process::id()));
        let path = root.join("cache").join("latest.log");

        create_log_file(&path).unwrap();
        assert!(path.is_file());

        fs::remove_dir_all(&root).unwrap();
    }
}
