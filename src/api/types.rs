use serde::{Deserialize, Deserializer, Serialize};

/// Representation depth requested from the remote service (`v=` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Ref,
    Default,
    Full,
}

/// Query string for collection and single-resource reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub v: View,
    #[serde(rename = "includeAll")]
    pub include_all: bool,
}

impl QueryParams {
    /// `includeAll=true` at the given view depth. Retired records are part of
    /// the administrative listing.
    pub fn all(v: View) -> Self {
        Self { v, include_all: true }
    }
}

/// A reference to another resource. Only `uuid` takes part in equality checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourceRef {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            display: None,
            name: None,
        }
    }

    /// Label for templates: name, then display, then the bare uuid.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.display.as_deref())
            .unwrap_or(&self.uuid)
    }
}

/// A role as returned by the remote service.
///
/// A role that has not been saved yet has an empty `uuid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub privileges: Vec<ResourceRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inherited_roles: Vec<ResourceRef>,
    /// Transitive closure computed by the server. Read-only.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub all_inherited_roles: Vec<ResourceRef>,
}

impl Role {
    pub fn is_new(&self) -> bool {
        self.uuid.is_empty()
    }
}

/// A privilege. Privileges are defined elsewhere and only read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Body submitted by a save. Create when `uuid` is absent, update otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub inherited_roles: Vec<ResourceRef>,
    pub privileges: Vec<ResourceRef>,
}

/// One page of a collection response.
#[derive(Debug, Clone, Deserialize)]
pub struct Results<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub rel: String,
    pub uri: String,
}

/// The `next` page link of a collection page, if any.
pub fn next_link(links: &[Link]) -> Option<&str> {
    links
        .iter()
        .find(|l| l.rel == "next")
        .map(|l| l.uri.as_str())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
