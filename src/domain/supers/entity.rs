use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hero or villain record, as read back from storage.
///
/// `groups` and `relatives_count` are not stored; they are computed
/// every time the record is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Super {
    /// Store-assigned surrogate identity, never exposed to clients
    #[serde(skip)]
    pub id: i64,

    /// Public identifier, immutable once created
    pub uuid: Uuid,

    #[serde(rename = "type")]
    pub kind: SuperType,

    /// Unique across all supers (case-sensitive)
    pub name: String,

    #[serde(rename = "fullname")]
    pub full_name: String,

    pub intelligence: i64,
    pub power: i64,
    pub occupation: String,
    pub image_url: String,

    /// Names of the groups this super belongs to
    pub groups: Vec<String>,

    /// Number of distinct other supers sharing at least one group
    pub relatives_count: i64,
}

/// Discriminator of a super
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SuperType {
    Hero,
    Vilan,
}

impl SuperType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuperType::Hero => "HERO",
            SuperType::Vilan => "VILAN",
        }
    }
}

impl std::fmt::Display for SuperType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate for a new super, as supplied by a client.
///
/// `kind` is kept as raw text until validation normalizes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSuper {
    /// Optional explicit identifier; the store generates one when absent
    pub uuid: Option<Uuid>,

    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    #[serde(rename = "fullname")]
    pub full_name: String,

    pub intelligence: i64,
    pub power: i64,
    pub occupation: String,
    pub image_url: String,
}

impl NewSuper {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
