// SPDX-FileCopyrightText: 2026 Weblog Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Entries
//!
//! The resolved post model the site pipeline delivers: dates already
//! formatted, reading time already estimated, body already rendered.
//! This crate only carries the values; parsing and ordering stay upstream.

use serde::{Deserialize, Serialize};

/// One resolved blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    /// URL slug, unique within the site.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Publication date, preformatted for display (e.g. "March 5, 2024").
    pub date: String,

    /// Reading-time text, preformatted (e.g. "4 min read").
    pub reading_time: String,

    /// Rendered body content. Empty for list views, which only fetch
    /// front-matter fields.
    #[serde(default)]
    pub body: String,
}

impl PostEntry {
    /// Returns the caption shown under the title in list rows:
    /// `"{date} - {reading_time}"`.
    pub fn summary_line(&self) -> String {
        format!("{} - {}", self.date, self.reading_time)
    }
}

/// An ordered list of posts, exactly as delivered by the pipeline.
///
/// No sorting happens here; the pipeline already orders entries for the
/// surface that requested them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostList {
    entries: Vec<PostEntry>,
}

impl PostList {
    /// Creates an empty list.
    pub fn new() -> Self {
        PostList {
            entries: Vec::new(),
        }
    }

    /// Wraps entries in their delivered order.
    pub fn from_entries(entries: Vec<PostEntry>) -> Self {
        PostList { entries }
    }

    /// Iterates the posts in delivered order.
    pub fn iter(&self) -> impl Iterator<Item = &PostEntry> {
        self.entries.iter()
    }

    /// Finds a post by slug.
    pub fn find(&self, slug: &str) -> Option<&PostEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Returns the number of posts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list holds no posts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PostList {
        PostList::from_entries(vec![
            PostEntry {
                slug: "second-post".to_string(),
                title: "Second Post".to_string(),
                date: "March 5, 2024".to_string(),
                reading_time: "4 min read".to_string(),
                body: String::new(),
            },
            PostEntry {
                slug: "first-post".to_string(),
                title: "First Post".to_string(),
                date: "January 1, 2024".to_string(),
                reading_time: "2 min read".to_string(),
                body: String::new(),
            },
        ])
    }

    #[test]
    fn delivered_order_is_kept() {
        let list = sample();
        let titles: Vec<&str> = list.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Second Post", "First Post"]);
    }

    #[test]
    fn summary_line_joins_date_and_reading_time() {
        let list = sample();
        let post = list.iter().next().unwrap();
        assert_eq!(post.summary_line(), "March 5, 2024 - 4 min read");
    }

    #[test]
    fn find_locates_a_post_by_slug() {
        let list = sample();
        assert_eq!(list.find("first-post").unwrap().title, "First Post");
        assert!(list.find("missing").is_none());
    }

    #[test]
    fn deserializes_from_a_json_array() {
        let json = r#"[
            {"slug": "a", "title": "A", "date": "May 1, 2024", "reading_time": "1 min read"}
        ]"#;

        let list: PostList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.find("a").unwrap().body, "");
    }
}
