//! University records as returned by the directory endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub alpha_two_code: String,
    #[serde(rename = "state-province", default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub web_pages: Vec<String>,
}

impl UniversityRecord {
    /// First listed web page, used as the card link.
    pub fn primary_web_page(&self) -> Option<&str> {
        self.web_pages.first().map(|s| s.as_str())
    }

    pub fn domains_display(&self) -> String {
        self.domains.join(", ")
    }

    /// Name of the image file produced when this card is exported.
    pub fn export_file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}
