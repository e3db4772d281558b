// src/tkn/output.rs

//! Parsing of the external tool's list output.
//!
//! The tool prints a JSON document with an `items` array when asked for
//! `-o json`; each item carries the resource name under `metadata.name`.
//! Anything else degrades instead of failing:
//!
//! - content on stderr means the tool itself reported a cluster problem,
//! - stdout that does not parse as the expected document counts as an empty
//!   resource set.
//!
//! Degradation is explicit in [`FetchOutcome`] so callers (and tests) can
//! distinguish "zero resources" from "the fetch went wrong".

use std::collections::HashSet;

use serde::Deserialize;

use crate::exec::ExitData;

#[derive(Debug, Deserialize)]
struct ResourceList {
    #[serde(default)]
    items: Vec<ResourceItem>,
}

#[derive(Debug, Deserialize)]
struct ResourceItem {
    metadata: ResourceMetadata,
}

#[derive(Debug, Deserialize)]
struct ResourceMetadata {
    name: String,
}

/// Result of interpreting one list invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Names extracted from the output, de-duplicated, fetch order preserved.
    Listed(Vec<String>),
    /// The tool reported an error on its error stream; stdout is ignored.
    ClusterError(String),
    /// stdout was not the expected JSON document.
    Malformed,
}

/// Interpret the exit data of a list command.
pub fn parse_list_output(exit: &ExitData) -> FetchOutcome {
    let stderr = exit.stderr.trim();
    if !stderr.is_empty() {
        return FetchOutcome::ClusterError(stderr.to_string());
    }

    let list: ResourceList = match serde_json::from_str(&exit.stdout) {
        Ok(list) => list,
        Err(_) => return FetchOutcome::Malformed,
    };

    let mut seen = HashSet::new();
    let names = list
        .items
        .into_iter()
        .map(|item| item.metadata.name)
        .filter(|name| seen.insert(name.clone()))
        .collect();

    FetchOutcome::Listed(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stdout(s: &str) -> ExitData {
        ExitData::new(s, "")
    }

    #[test]
    fn parses_item_names() {
        let exit = stdout(r#"{"items":[{"metadata":{"name":"build-pipeline"}}]}"#);
        assert_eq!(
            parse_list_output(&exit),
            FetchOutcome::Listed(vec!["build-pipeline".to_string()])
        );
    }

    #[test]
    fn duplicate_names_appear_once() {
        let exit = stdout(
            r#"{"items":[
                {"metadata":{"name":"a"}},
                {"metadata":{"name":"b"}},
                {"metadata":{"name":"a"}}
            ]}"#,
        );
        assert_eq!(
            parse_list_output(&exit),
            FetchOutcome::Listed(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn missing_items_array_is_an_empty_listing() {
        let exit = stdout("{}");
        assert_eq!(parse_list_output(&exit), FetchOutcome::Listed(Vec::new()));
    }

    #[test]
    fn stderr_short_circuits_stdout() {
        let exit = ExitData::new(r#"{"items":[{"metadata":{"name":"a"}}]}"#, "no cluster connection\n");
        assert_eq!(
            parse_list_output(&exit),
            FetchOutcome::ClusterError("no cluster connection".to_string())
        );
    }

    #[test]
    fn non_json_stdout_is_malformed() {
        let exit = stdout("NAME   AGE\nfirst  2d\n");
        assert_eq!(parse_list_output(&exit), FetchOutcome::Malformed);
    }

    #[test]
    fn empty_stdout_is_malformed() {
        let exit = stdout("");
        assert_eq!(parse_list_output(&exit), FetchOutcome::Malformed);
    }
}
