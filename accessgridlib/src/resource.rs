//! Resource identities: a resource name qualified by its API group.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label shown for the unnamed core group.
pub const CORE_GROUP_LABEL: &str = "core";

/// A resource name together with the API group it belongs to.
///
/// The empty group is the core group. Ordering compares the group first and
/// the resource second, both byte-wise, so sorting a list of identities lays
/// them out group by group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceIdentity {
    // Field order drives the derived ordering.
    pub group: String,
    pub resource: String,
}

impl ResourceIdentity {
    pub fn new(resource: impl Into<String>, group: impl Into<String>) -> Self {
        ResourceIdentity {
            group: group.into(),
            resource: resource.into(),
        }
    }

    /// Identity in the core group
    pub fn core(resource: impl Into<String>) -> Self {
        Self::new(resource, "")
    }

    /// Parse the combined `resource.group` form.
    ///
    /// Everything after the first dot is the group, so
    /// `ingresses.networking.k8s.io` lands in `networking.k8s.io`.
    pub fn parse(combined: &str) -> Self {
        match combined.split_once('.') {
            Some((resource, group)) => Self::new(resource, group),
            None => Self::core(combined),
        }
    }

    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }

    /// Group name as shown in group header rows
    pub fn display_group(&self) -> &str {
        if self.is_core() {
            CORE_GROUP_LABEL
        } else {
            &self.group
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(&self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

impl FromStr for ResourceIdentity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ResourceIdentity {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for ResourceIdentity {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ResourceIdentity> for String {
    fn from(id: ResourceIdentity) -> Self {
        id.to_string()
    }
}
