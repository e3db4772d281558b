// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TektreeError};

/// Highest verbosity level the external tool understands.
const MAX_VERBOSITY: u8 = 5;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TektreeError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.tool, raw.cluster))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tool(cfg)?;
    validate_cluster(cfg)?;
    Ok(())
}

fn validate_tool(cfg: &RawConfigFile) -> Result<()> {
    if cfg.tool.binary.trim().is_empty() {
        return Err(TektreeError::ConfigError(
            "[tool].binary must not be empty".to_string(),
        ));
    }

    if cfg.tool.verbosity > MAX_VERBOSITY {
        return Err(TektreeError::ConfigError(format!(
            "[tool].verbosity must be <= {} (got {})",
            MAX_VERBOSITY, cfg.tool.verbosity
        )));
    }

    Ok(())
}

fn validate_cluster(cfg: &RawConfigFile) -> Result<()> {
    if let Some(ns) = &cfg.cluster.namespace {
        if ns.trim().is_empty() {
            return Err(TektreeError::ConfigError(
                "[cluster].namespace must not be empty when set".to_string(),
            ));
        }
        if ns.contains(char::is_whitespace) {
            return Err(TektreeError::ConfigError(format!(
                "[cluster].namespace must not contain whitespace (got '{ns}')"
            )));
        }
    }
    Ok(())
}
