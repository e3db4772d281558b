// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [tool]
/// binary = "tkn"
/// verbosity = 2
///
/// [cluster]
/// namespace = "ci"
/// ```
///
/// All sections are optional and have reasonable defaults, so an empty file
/// (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// External CLI tool settings from `[tool]`.
    #[serde(default)]
    pub tool: ToolSection,

    /// Cluster scoping from `[cluster]`.
    #[serde(default)]
    pub cluster: ClusterSection,
}

/// `[tool]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSection {
    /// Name or path of the CLI binary used to observe the cluster.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Output verbosity passed to the tool as `-v N` (0 disables the flag).
    #[serde(default)]
    pub verbosity: u8,
}

fn default_binary() -> String {
    "tkn".to_string()
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            verbosity: 0,
        }
    }
}

/// `[cluster]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClusterSection {
    /// Namespace to scope list commands to (`-n NAME`); `None` lets the tool
    /// use its own default.
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Validated configuration.
///
/// Construct via `ConfigFile::try_from(raw)` (see `validate.rs`) or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub tool: ToolSection,
    pub cluster: ClusterSection,
}

impl ConfigFile {
    /// Assemble a `ConfigFile` without re-running validation.
    ///
    /// Only meant to be called from the `TryFrom<RawConfigFile>` impl.
    pub(crate) fn new_unchecked(tool: ToolSection, cluster: ClusterSection) -> Self {
        Self { tool, cluster }
    }
}
