use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read colors from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine a log directory")]
    NoLogDir,

    #[error("failed to set up logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_error_names_the_create() {
        let err = CliError::LogFile {
            path: PathBuf::from("/cache/latest.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            err.to_string(),
            "failed to create log file /cache/latest.log: denied"
        );
    }
}
