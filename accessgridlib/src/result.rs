//! Access results and their grouping into tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AccessGridError;
use crate::outcome::Outcome;
use crate::output::table::{Row, Table};
use crate::resource::ResourceIdentity;

/// Verbs in the order they are usually displayed.
pub const STANDARD_VERBS: [&str; 7] = [
    "create", "get", "list", "watch", "update", "patch", "delete",
];

/// Outcomes per verb for a single resource.
pub type VerbOutcomes = HashMap<String, Outcome>;

/// Access result for all resources.
///
/// Serialized as an object keyed by the combined `resource.group` form:
///
/// ```json
/// { "pods": { "get": "allowed" }, "deployments.apps": { "list": "denied" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessResult {
    resources: HashMap<ResourceIdentity, VerbOutcomes>,
}

impl AccessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a result from its JSON form
    pub fn from_json(json: &str) -> Result<Self, AccessGridError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Record the outcome of `verb` on `resource`, replacing any earlier one.
    pub fn insert(
        &mut self,
        resource: impl Into<ResourceIdentity>,
        verb: impl Into<String>,
        outcome: Outcome,
    ) {
        self.resources
            .entry(resource.into())
            .or_default()
            .insert(verb.into(), outcome);
    }

    /// Builder form of [`AccessResult::insert`]
    pub fn with(
        mut self,
        resource: impl Into<ResourceIdentity>,
        verb: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        self.insert(resource, verb, outcome);
        self
    }

    /// Register a resource with no checked verbs
    pub fn insert_resource(&mut self, resource: impl Into<ResourceIdentity>) {
        self.resources.entry(resource.into()).or_default();
    }

    /// Outcome for one pair, `NoData` when it was never checked
    pub fn outcome(&self, resource: &ResourceIdentity, verb: &str) -> Outcome {
        self.resources
            .get(resource)
            .and_then(|verbs| verbs.get(verb))
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resources(&self) -> impl Iterator<Item = (&ResourceIdentity, &VerbOutcomes)> {
        self.resources.iter()
    }

    /// Resource identities ordered by group, then resource
    pub fn sorted_resources(&self) -> Vec<&ResourceIdentity> {
        let mut ids: Vec<&ResourceIdentity> = self.resources.keys().collect();
        ids.sort();
        ids
    }

    /// Every verb that occurs in the result.
    ///
    /// Standard verbs come first in their usual order, anything else follows
    /// alphabetically.
    pub fn verbs(&self) -> Vec<String> {
        let mut seen: Vec<&str> = self
            .resources
            .values()
            .flat_map(|verbs| verbs.keys().map(String::as_str))
            .collect();
        seen.sort_unstable();
        seen.dedup();

        let mut verbs: Vec<String> = STANDARD_VERBS
            .iter()
            .filter(|v| seen.contains(*v))
            .map(|v| v.to_string())
            .collect();
        verbs.extend(
            seen.into_iter()
                .filter(|v| !STANDARD_VERBS.contains(v))
                .map(str::to_string),
        );
        verbs
    }

    /// Build the grouped table for `verbs`, in column order.
    ///
    /// Resources are sorted by group and then name. Each group starts with a
    /// header row naming the group (the core group shows as `core`) and the
    /// upper-cased verbs; groups after the first are preceded by a spacer.
    /// Data rows carry the bare resource name and one outcome per verb.
    pub fn table<S: AsRef<str>>(&self, verbs: &[S]) -> Table {
        let mut table = Table::new();
        let mut last_group: Option<&str> = None;

        for id in self.sorted_resources() {
            if last_group != Some(id.group.as_str()) {
                if last_group.is_some() {
                    table.push(Row::Spacer);
                }
                table.push(Row::group(id.display_group(), verbs));
                last_group = Some(id.group.as_str());
            }

            let outcomes = verbs
                .iter()
                .map(|verb| self.outcome(id, verb.as_ref()))
                .collect();
            table.add_row(id.resource.as_str(), outcomes);
        }

        tracing::debug!(
            resources = self.len(),
            verbs = verbs.len(),
            rows = table.rows.len(),
            "assembled access table"
        );
        table
    }
}

impl FromIterator<(ResourceIdentity, VerbOutcomes)> for AccessResult {
    fn from_iter<I: IntoIterator<Item = (ResourceIdentity, VerbOutcomes)>>(iter: I) -> Self {
        AccessResult {
            resources: iter.into_iter().collect(),
        }
    }
}
