// src/tkn/command.rs

//! Command-string builder for the external CLI tool.
//!
//! All command lines issued by tektree are produced here; no other module
//! hard-codes a `tkn` invocation. The builder knows three knobs:
//!
//! - the binary name or path (`[tool].binary`),
//! - an optional namespace, appended as ` -n NAME`,
//! - a verbosity level, appended as ` -v N` when greater than zero.

use crate::config::ConfigFile;

/// Builds the command strings understood by the external tool.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    binary: String,
    namespace: Option<String>,
    verbosity: u8,
}

impl CommandBuilder {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            namespace: None,
            verbosity: 0,
        }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            binary: cfg.tool.binary.clone(),
            namespace: cfg.cluster.namespace.clone(),
            verbosity: cfg.tool.verbosity,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn list_pipelines(&self) -> String {
        self.build("pipeline list -o json")
    }

    pub fn list_pipeline_runs(&self, pipeline: &str) -> String {
        self.build(&format!("pipelinerun list {pipeline} -o json"))
    }

    pub fn list_tasks(&self) -> String {
        self.build("task list -o json")
    }

    pub fn list_task_runs(&self, owner: &str) -> String {
        self.build(&format!("taskrun list {owner} -o json"))
    }

    pub fn list_cluster_tasks(&self) -> String {
        self.build("clustertask list -o json")
    }

    pub fn start_pipeline(&self, name: &str) -> String {
        self.build(&format!("pipeline start {name}"))
    }

    pub fn describe_pipeline(&self, name: &str) -> String {
        self.build(&format!("pipeline describe {name}"))
    }

    pub fn pipeline_run_logs(&self, name: &str) -> String {
        self.build(&format!("pipelinerun logs {name}"))
    }

    pub fn task_run_logs(&self, name: &str) -> String {
        self.build(&format!("taskrun logs {name}"))
    }

    fn build(&self, rest: &str) -> String {
        let mut cmd = format!("{} {rest}", self.quoted_binary());
        if let Some(ns) = &self.namespace {
            cmd.push_str(&format!(" -n {ns}"));
        }
        if self.verbosity > 0 {
            cmd.push_str(&format!(" -v {}", self.verbosity));
        }
        cmd
    }

    /// The binary may be a path containing spaces (e.g. a downloaded tool
    /// location); quote it so the shell keeps it as one word.
    fn quoted_binary(&self) -> String {
        if self.binary.contains(char::is_whitespace) {
            format!("\"{}\"", self.binary)
        } else {
            self.binary.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_commands_request_json() {
        let cmds = CommandBuilder::new("tkn");
        assert_eq!(cmds.list_pipelines(), "tkn pipeline list -o json");
        assert_eq!(
            cmds.list_pipeline_runs("build"),
            "tkn pipelinerun list build -o json"
        );
        assert_eq!(cmds.list_task_runs("lint"), "tkn taskrun list lint -o json");
        assert_eq!(cmds.list_cluster_tasks(), "tkn clustertask list -o json");
    }

    #[test]
    fn namespace_and_verbosity_are_appended() {
        let cmds = CommandBuilder::new("tkn")
            .with_namespace("ci")
            .with_verbosity(2);
        assert_eq!(cmds.list_tasks(), "tkn task list -o json -n ci -v 2");
        assert_eq!(cmds.start_pipeline("deploy"), "tkn pipeline start deploy -n ci -v 2");
    }

    #[test]
    fn zero_verbosity_adds_no_flag() {
        let cmds = CommandBuilder::new("tkn").with_verbosity(0);
        assert_eq!(cmds.list_pipelines(), "tkn pipeline list -o json");
    }

    #[test]
    fn binary_path_with_spaces_is_quoted() {
        let cmds = CommandBuilder::new("/opt/tekton tools/tkn");
        assert_eq!(
            cmds.list_pipelines(),
            "\"/opt/tekton tools/tkn\" pipeline list -o json"
        );
    }
}
