// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site Configuration
//!
//! The static configuration value the build pipeline hands to every page:
//! site identity plus the author's ordered contact map. Loaded once at build
//! time and passed down explicitly; there is no ambient/global access.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::ContactMap;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static configuration for the whole site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, shown in the navigation bar and page `<title>`.
    pub title: String,

    /// Short site description for meta tags.
    pub description: String,

    /// Author display name.
    pub author: String,

    /// Canonical base URL of the deployed site.
    pub base_url: String,

    /// Footer credit/copyright line.
    #[serde(default)]
    pub copyright: String,

    /// The author's contact channels, in footer render order.
    #[serde(default)]
    pub contacts: ContactMap,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: "A personal blog".to_string(),
            author: "Anonymous".to_string(),
            base_url: "https://example.com".to_string(),
            copyright: String::new(),
            contacts: ContactMap::new(),
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the author name.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Sets the footer credit line.
    pub fn with_copyright(mut self, copyright: &str) -> Self {
        self.copyright = copyright.to_string();
        self
    }

    /// Sets the contact map.
    pub fn with_contacts(mut self, contacts: ContactMap) -> Self {
        self.contacts = contacts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Channel;

    #[test]
    fn parses_a_full_configuration() {
        let json = r#"{
            "title": "Facundo's Blog",
            "description": "Projects and posts",
            "author": "Facundo",
            "base_url": "https://blog.example.com",
            "contacts": {
                "email": "facundo@example.com",
                "github": "facundo",
                "linkedin": "facundo",
                "resume": "facundo"
            }
        }"#;

        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.title, "Facundo's Blog");
        assert_eq!(config.contacts.len(), 4);
        assert_eq!(
            config.contacts.get(&Channel::Email),
            Some("facundo@example.com")
        );

        // Document order carries through to render order.
        let tags: Vec<&str> = config.contacts.iter().map(|e| e.channel().tag()).collect();
        assert_eq!(tags, ["email", "github", "linkedin", "resume"]);
    }

    #[test]
    fn missing_contacts_key_means_empty_map() {
        let json = r#"{
            "title": "T",
            "description": "D",
            "author": "A",
            "base_url": "https://example.com"
        }"#;

        let config = SiteConfig::from_json(json).unwrap();
        assert!(config.contacts.is_empty());
        assert!(config.copyright.is_empty());
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn builder_setters_apply() {
        let config = SiteConfig::default()
            .with_author("Alice")
            .with_copyright("Built with Weblog");

        assert_eq!(config.author, "Alice");
        assert_eq!(config.copyright, "Built with Weblog");
    }
}
