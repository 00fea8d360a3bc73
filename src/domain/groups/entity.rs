use serde::{Deserialize, Serialize};

/// A named collection of supers.
/// Members are exposed by name, never as full records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(skip)]
    pub id: i64,

    /// Unique across all groups (case-sensitive)
    pub name: String,

    /// Member names
    pub supers: Vec<String>,
}

/// Candidate for a new group: a name plus the names of its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewGroup {
    pub name: String,
    pub supers: Vec<String>,
}

impl NewGroup {
    pub fn new<I, S>(name: impl Into<String>, supers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            supers: supers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Link row between a group and a super. No payload beyond the two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupSuper {
    pub group_id: i64,
    pub super_id: i64,
}
