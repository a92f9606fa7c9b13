//! Loader for the RON motion tuning file.

use ron::Options;
use std::fs;
use std::path::{Path, PathBuf};

use crate::movement::MotionParams;

/// Default location of the tuning file, relative to the working directory.
pub const DEFAULT_MOTION_PATH: &str = "assets/data/motion.ron";

/// Environment variable overriding [`DEFAULT_MOTION_PATH`].
pub const MOTION_PATH_ENV: &str = "MOTION_CONFIG";

/// Error type for content loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl ContentLoadError {
    pub fn is_missing_file(&self) -> bool {
        match self {
            ContentLoadError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            ContentLoadError::Parse { .. } => false,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Resolve the tuning file path from the environment, falling back to the default.
pub fn motion_path() -> PathBuf {
    std::env::var_os(MOTION_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MOTION_PATH))
}

/// Parse motion tuning from RON text. Missing fields keep their defaults.
pub fn parse_motion_params(file: &str, contents: &str) -> Result<MotionParams, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Load motion tuning from a RON file.
pub fn load_motion_params(path: &Path) -> Result<MotionParams, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file_name.clone(),
        source,
    })?;

    parse_motion_params(&file_name, &contents)
}
