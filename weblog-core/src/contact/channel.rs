// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Channels
//!
//! Handles the known contact channels (social handles, email, resume
//! registry) and the href templates that turn a raw configured value into a
//! clickable destination.

use serde::{Deserialize, Serialize};

use super::Icon;

/// A named contact method from the site configuration.
///
/// The five known channels are matched by exact, case-sensitive tag
/// (`"twitter"`, `"github"`, `"email"`, `"linkedin"`, `"resume"`). Any other
/// tag, including a differently-cased known one, is carried as `Other` and
/// its configured value is used verbatim as the destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Twitter,
    Github,
    Email,
    Linkedin,
    Resume,
    Other(String),
}

impl Channel {
    /// Parses a configuration tag into a channel. Never fails: unknown tags
    /// become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "twitter" => Channel::Twitter,
            "github" => Channel::Github,
            "email" => Channel::Email,
            "linkedin" => Channel::Linkedin,
            "resume" => Channel::Resume,
            other => Channel::Other(other.to_string()),
        }
    }

    /// Returns the configuration tag for this channel.
    pub fn tag(&self) -> &str {
        match self {
            Channel::Twitter => "twitter",
            Channel::Github => "github",
            Channel::Email => "email",
            Channel::Linkedin => "linkedin",
            Channel::Resume => "resume",
            Channel::Other(tag) => tag,
        }
    }

    /// Returns the link title: the tag with its first character upper-cased
    /// and the rest unchanged (`"github"` becomes `"Github"`).
    pub fn title(&self) -> String {
        let tag = self.tag();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Builds the destination URL for a configured value.
    ///
    /// Total and pure: every channel/value pair yields a string. The value
    /// is substituted into the channel's template without any validation or
    /// normalization; a malformed value propagates into a malformed href.
    /// Unknown channels pass the value through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use weblog_core::Channel;
    ///
    /// assert_eq!(
    ///     Channel::Github.resolve_href("alice"),
    ///     "https://github.com/alice"
    /// );
    /// assert_eq!(
    ///     Channel::from_tag("blog").resolve_href("https://example.com"),
    ///     "https://example.com"
    /// );
    /// ```
    pub fn resolve_href(&self, value: &str) -> String {
        match self {
            Channel::Twitter => format!("https://www.twitter.com/{}", value),
            Channel::Github => format!("https://github.com/{}", value),
            Channel::Email => format!("mailto:{}", value),
            Channel::Linkedin => format!("https://www.linkedin.com/in/{}", value),
            Channel::Resume => format!("https://registry.jsonresume.org/{}", value),
            Channel::Other(_) => value.to_string(),
        }
    }

    /// Returns the glyph handle for this channel.
    ///
    /// The five known channels each map to a distinct icon; `Other` channels
    /// have none, which the renderer reports as a configuration-data error.
    pub fn resolve_icon(&self) -> Option<Icon> {
        match self {
            Channel::Twitter => Some(Icon::Twitter),
            Channel::Github => Some(Icon::Github),
            Channel::Email => Some(Icon::Envelope),
            Channel::Linkedin => Some(Icon::Linkedin),
            Channel::Resume => Some(Icon::FileAlt),
            Channel::Other(_) => None,
        }
    }
}

impl Serialize for Channel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Channel::from_tag(&tag))
    }
}
