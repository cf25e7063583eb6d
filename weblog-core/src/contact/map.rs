// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Map
//!
//! The ordered channel-to-value collection configured for a single author.
//! Insertion order is render order, so the container is an ordered vector
//! rather than a hash map, and JSON (de)serialization goes through custom
//! impls that keep document order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use super::Channel;

/// One configured channel/value pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    channel: Channel,
    value: String,
}

impl ContactEntry {
    /// Creates an entry from a channel and its raw configured value.
    pub fn new(channel: Channel, value: &str) -> Self {
        ContactEntry {
            channel,
            value: value.to_string(),
        }
    }

    /// Returns the entry's channel.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Returns the raw configured value. Its meaning depends on the channel:
    /// a handle, a username, an email address, a registry key, or a literal
    /// URL for unrecognized channels.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The ordered collection of configured channel/value pairs for one author.
///
/// Loaded once from static site configuration and immutable thereafter.
/// Channels are unique: re-inserting an existing channel replaces its value
/// in place and keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMap {
    entries: Vec<ContactEntry>,
}

impl ContactMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        ContactMap {
            entries: Vec::new(),
        }
    }

    /// Builds a map from tag/value pairs in the given order.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = ContactMap::new();
        for (tag, value) in pairs {
            map.insert(Channel::from_tag(tag), value);
        }
        map
    }

    /// Inserts a channel/value pair.
    ///
    /// A new channel is appended at the end; an existing one has its value
    /// replaced without moving.
    pub fn insert(&mut self, channel: Channel, value: &str) {
        match self.entries.iter_mut().find(|e| e.channel == channel) {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(ContactEntry::new(channel, value)),
        }
    }

    /// Returns the configured value for a channel, if present.
    pub fn get(&self, channel: &Channel) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.channel == channel)
            .map(|e| e.value.as_str())
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactEntry> {
        self.entries.iter()
    }

    /// Returns the number of configured channels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no channels are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ContactMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.channel.tag(), &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContactMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ContactMapVisitor;

        impl<'de> Visitor<'de> for ContactMapVisitor {
            type Value = ContactMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of contact channel tags to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = ContactMap::new();
                while let Some((tag, value)) = access.next_entry::<String, String>()? {
                    map.insert(Channel::from_tag(&tag), &value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ContactMapVisitor)
    }
}
