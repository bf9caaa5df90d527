use serde::{Deserialize, Serialize};

/// A league as delivered by the stats backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub source_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl League {
    pub fn new(id: u32, name: impl Into<String>, slug: impl Into<String>) -> Self {
        League {
            id,
            name: name.into(),
            slug: slug.into(),
            description: None,
            logo_url: None,
            source_platform: None,
            source_url: None,
            active: true,
        }
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source_platform(mut self, source_platform: impl Into<String>) -> Self {
        self.source_platform = Some(source_platform.into());
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Relative link to the league detail page.
    pub fn url(&self) -> String {
        format!("/leagues/{}", self.slug)
    }

    /// Logo reference, empty strings count as missing.
    pub fn logo(&self) -> Option<&str> {
        non_empty(&self.logo_url)
    }

    /// Description text, empty strings count as missing.
    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn platform(&self) -> Option<&str> {
        non_empty(&self.source_platform)
    }

    pub fn source(&self) -> Option<&str> {
        non_empty(&self.source_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
