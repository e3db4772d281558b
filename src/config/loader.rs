// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - an empty tool binary,
///   - out-of-range verbosity,
///   - a malformed namespace.
///
/// A *missing* file is not an error: the viewer works against built-in
/// defaults, so we fall back to `RawConfigFile::default()` in that case. A
/// file that exists but fails to read or parse is still an error.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    let raw_config = if path.exists() {
        load_from_path(path)?
    } else {
        debug!(path = %path.display(), "config file not found; using defaults");
        RawConfigFile::default()
    };

    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Tektree.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `TEKTREE_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Tektree.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_sections_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tool]\nbinary = \"/opt/tkn/tkn\"\nverbosity = 3\n\n[cluster]\nnamespace = \"ci\"\n"
        )
        .unwrap();

        let cfg = load_and_validate(file.path()).unwrap();
        assert_eq!(cfg.tool.binary, "/opt/tkn/tkn");
        assert_eq!(cfg.tool.verbosity, 3);
        assert_eq!(cfg.cluster.namespace.as_deref(), Some("ci"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_and_validate("does-not-exist/Tektree.toml").unwrap();
        assert_eq!(cfg.tool.binary, "tkn");
        assert!(cfg.cluster.namespace.is_none());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[tool\nbinary = ").unwrap();

        assert!(load_and_validate(file.path()).is_err());
    }
}
