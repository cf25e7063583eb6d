// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Weblog Core Library
//!
//! Data and presentation-logic layer for a personal blog/portfolio site.
//! The hosting site pipeline (routing, Markdown rendering, image processing)
//! supplies fully resolved inputs; this crate turns them into render-ready
//! values, most notably the contact-link list in the site footer.

pub mod contact;
pub mod content;
pub mod site;

pub use contact::{
    render, render_into, Channel, ContactEntry, ContactMap, Icon, LinkSink, RenderError,
    ResolvedLink,
};
pub use content::{PostEntry, PostList};
pub use site::{ConfigError, SiteConfig};
