//! Loading access results from JSON documents.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use accessgridlib::AccessResult;
use anyhow::Context;
use serde::Deserialize;

/// An input document: either a report carrying its own verb list, or a bare
/// resource → verb → outcome object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Report {
        #[serde(default)]
        verbs: Option<Vec<String>>,
        resources: AccessResult,
    },
    Bare(AccessResult),
}

/// A loaded access result and the verbs it was checked for, if it says so.
#[derive(Debug)]
pub struct Input {
    pub result: AccessResult,
    pub verbs: Option<Vec<String>>,
}

impl Input {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let document: Document =
            serde_json::from_str(json).context("input is not a valid access result document")?;
        Ok(match document {
            Document::Report { verbs, resources } => Input {
                result: resources,
                verbs,
            },
            Document::Bare(result) => Input {
                result,
                verbs: None,
            },
        })
    }

    /// Read from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let json = if path == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read access result from stdin")?;
            buf
        } else {
            fs::read_to_string(Path::new(path))
                .with_context(|| format!("failed to read access result from '{path}'"))?
        };
        let input = Self::parse(&json)?;
        tracing::debug!(
            source = path,
            resources = input.result.len(),
            "loaded access result"
        );
        Ok(input)
    }

    /// Verbs to display: explicit ones win, then the document's own list,
    /// then every verb present in the data.
    pub fn resolve_verbs(&self, explicit: Option<Vec<String>>) -> Vec<String> {
        explicit
            .or_else(|| self.verbs.clone())
            .unwrap_or_else(|| self.result.verbs())
    }
}
