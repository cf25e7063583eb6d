// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Icon Handles
//!
//! Concrete glyph handles for the presentation layer, one per known contact
//! channel. The set is fixed at compile time; there is no runtime lookup by
//! name.

/// A glyph handle the rendering surface can map to a visual icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Twitter,
    Github,
    Envelope,
    Linkedin,
    FileAlt,
}

impl Icon {
    /// Returns the stable identifier the presentation layer keys its glyph
    /// assets by.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Twitter => "twitter",
            Icon::Github => "github",
            Icon::Envelope => "envelope",
            Icon::Linkedin => "linkedin",
            Icon::FileAlt => "file-alt",
        }
    }
}
