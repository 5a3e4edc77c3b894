//! Configuration for the command-line front end

use std::path::{Path, PathBuf};

use crate::matrix::Operation;

/// Environment variable holding the `env_logger` filter
pub const LOG_ENV: &str = "SPARSE_MATRIX_LOG";

/// Filter used when [`LOG_ENV`] is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,sparse_matrix=info";

/// Environment variable overriding [`RunConfig::output_dir`]
pub const OUTPUT_DIR_ENV: &str = "SPARSE_MATRIX_OUTPUT_DIR";

/// Where and how a command-line run writes its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory receiving result files, created on demand
    pub output_dir: PathBuf,

    /// File name prefix; the operation name and `.txt` are appended
    pub file_prefix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("sample_results"),
            file_prefix: "sample_results_".to_string(),
        }
    }
}

impl RunConfig {
    /// Default configuration with [`OUTPUT_DIR_ENV`] applied when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(OUTPUT_DIR_ENV).filter(|d| !d.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    /// Config writing into `dir`
    pub fn with_output_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            output_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Fixed result location for `operation`
    pub fn output_path(&self, operation: Operation) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.txt", self.file_prefix, operation.as_str()))
    }
}
