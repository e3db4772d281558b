#![allow(dead_code)]

use tektree::config::{ClusterSection, ConfigFile, RawConfigFile, ToolSection};

/// Render the tool's `-o json` list document for the given names.
pub fn json_list(names: &[&str]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|name| format!(r#"{{"metadata":{{"name":"{name}"}}}}"#))
        .collect();
    format!(r#"{{"items":[{}]}}"#, items.join(","))
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                tool: ToolSection::default(),
                cluster: ClusterSection::default(),
            },
        }
    }

    pub fn with_binary(mut self, binary: &str) -> Self {
        self.config.tool.binary = binary.to_string();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.config.tool.verbosity = verbosity;
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.config.cluster.namespace = Some(namespace.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
