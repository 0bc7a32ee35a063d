use serde::{Deserialize, Deserializer, Serialize};

/// A showcase item type served from its own backend path.
pub trait ShowcaseResource: serde::de::DeserializeOwned + Send {
    /// Path under the backend origin, without a leading slash.
    const PATH: &'static str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Store label such as `playstore` or `appstore`, shown as-is.
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Display-only; never parsed as a date.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl ShowcaseResource for Project {
    const PATH: &'static str = "projects";
}

impl ShowcaseResource for Package {
    const PATH: &'static str = "packages";
}

impl ShowcaseResource for Article {
    const PATH: &'static str = "articles";
}

// A `tags` value that is not an array renders no tags instead of rejecting the whole response.
fn lenient_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// The three showcase categories. Each sequence is either all fallback or all server data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    pub projects: Vec<Project>,
    pub packages: Vec<Package>,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Fallback,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub projects: ContentSource,
    pub packages: ContentSource,
    pub articles: ContentSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub remarks: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Remarks,
}

impl ContactForm {
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
            ContactField::Remarks => self.remarks = value,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty() && self.remarks.is_empty()
    }
}
