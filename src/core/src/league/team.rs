use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub league_id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Team {
    pub fn new(id: u32, league_id: u32, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Team {
            id,
            league_id,
            name: name.into(),
            slug: slug.into(),
            abbreviation: None,
            logo_url: None,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }
}
