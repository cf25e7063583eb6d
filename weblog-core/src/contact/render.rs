// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Rendering
//!
//! Turns the configured contact map into the ordered list of render-ready
//! links the footer shows. A single synchronous pass, recomputed fresh on
//! every call; nothing here is cached or mutated in place.

use thiserror::Error;

use super::{ContactMap, Icon};

/// Render errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An entry's channel has no registered icon. This is a
    /// configuration-data error: the render fails as a whole rather than
    /// emitting a partial list.
    #[error("No icon registered for contact channel \"{channel}\"")]
    MissingIcon { channel: String },
}

/// A render-ready link derived from one contact entry.
///
/// Ephemeral: recomputed per render pass, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Clickable destination URL.
    pub href: String,
    /// Accessible label/tooltip for the link.
    pub title: String,
    /// Glyph handle for the visual icon.
    pub icon: Icon,
}

/// Resolves every entry of the map into a link, in insertion order.
///
/// The result has exactly one element per configured channel. An empty map
/// yields an empty list. If any entry's icon is missing the whole render
/// fails; no partial output is produced.
pub fn render(map: &ContactMap) -> Result<Vec<ResolvedLink>, RenderError> {
    map.iter()
        .map(|entry| {
            let channel = entry.channel();
            let icon = channel.resolve_icon().ok_or_else(|| RenderError::MissingIcon {
                channel: channel.tag().to_string(),
            })?;
            Ok(ResolvedLink {
                href: channel.resolve_href(entry.value()),
                title: channel.title(),
                icon,
            })
        })
        .collect()
}

/// A list-rendering surface that accepts one resolved link per entry.
///
/// Implemented by the hosting page; this crate never emits markup itself.
pub trait LinkSink {
    /// Receives the next link in render order.
    fn link(&mut self, link: &ResolvedLink);
}

/// Resolves the map and feeds each link to the sink in order.
///
/// The map is resolved in full before the first link is emitted, so a
/// failing entry leaves the sink untouched. Returns the number of links
/// emitted.
pub fn render_into(map: &ContactMap, sink: &mut dyn LinkSink) -> Result<usize, RenderError> {
    let links = render(map)?;
    for link in &links {
        sink.link(link);
    }
    Ok(links.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactMap;

    #[test]
    fn render_preserves_insertion_order() {
        let map = ContactMap::from_pairs([("github", "alice"), ("email", "a@b.com")]);
        let links = render(&map).unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Github");
        assert_eq!(links[0].href, "https://github.com/alice");
        assert_eq!(links[0].icon, Icon::Github);
        assert_eq!(links[1].title, "Email");
        assert_eq!(links[1].href, "mailto:a@b.com");
        assert_eq!(links[1].icon, Icon::Envelope);
    }

    #[test]
    fn reversed_input_reverses_output() {
        let map = ContactMap::from_pairs([("email", "a@b.com"), ("github", "alice")]);
        let links = render(&map).unwrap();

        assert_eq!(links[0].title, "Email");
        assert_eq!(links[1].title, "Github");
    }

    #[test]
    fn empty_map_renders_empty() {
        let links = render(&ContactMap::new()).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn unrecognized_channel_fails_the_whole_render() {
        let map = ContactMap::from_pairs([("github", "alice"), ("carrier-pigeon", "coop 7")]);
        let err = render(&map).unwrap_err();

        assert_eq!(
            err,
            RenderError::MissingIcon {
                channel: "carrier-pigeon".to_string()
            }
        );
    }

    #[test]
    fn render_is_idempotent() {
        let map = ContactMap::from_pairs([
            ("twitter", "alice_t"),
            ("linkedin", "alice"),
            ("resume", "alice"),
        ]);

        assert_eq!(render(&map).unwrap(), render(&map).unwrap());
    }
}
