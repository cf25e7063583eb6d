// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Link Module
//!
//! This module provides:
//! - The closed set of known contact channels with href templates
//! - Icon handles for the presentation layer
//! - The ordered contact map and the single-pass link render

mod channel;
mod icon;
mod map;
mod render;

pub use channel::Channel;
pub use icon::Icon;
pub use map::{ContactEntry, ContactMap};
pub use render::{render, render_into, LinkSink, RenderError, ResolvedLink};
