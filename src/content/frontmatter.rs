//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Custom deserializer for the `order` field: accepts an integer, a float
/// (truncated), or a numeric string. A present-but-unparsable value is
/// treated as absent and logged, never fatal.
fn lenient_order<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LenientOrder;

    impl<'de> Visitor<'de> for LenientOrder {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a float, or a numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(i64::try_from(value).ok())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as i64))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let parsed = value
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| value.trim().parse::<f64>().ok().map(|f| f as i64));
            if parsed.is_none() {
                tracing::warn!("Non-numeric 'order' value {:?}, treating as absent", value);
            }
            Ok(parsed)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LenientOrder)
}

/// Front-matter data from a post or project file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Date in `YYYY-MM-DD` form; compared lexically, never parsed
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub thumbnail: Option<String>,
    /// Promotes a project to the featured group in listings
    pub featured: bool,
    #[serde(deserialize_with = "lenient_order", default)]
    pub order: Option<i64>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub paper: Option<String>,

    /// Additional custom fields, kept for forward compatibility
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Marker line bounding the front-matter block
const MARKER: &str = "---";

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// The block is bounded by `---` lines at the top of the file. A file
    /// without an opening marker, or without a closing one, is all body with
    /// default metadata. An unparsable block is an error, which callers map
    /// to their malformed-content policy.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start();

        if !trimmed.starts_with(MARKER) {
            return Ok((FrontMatter::default(), content));
        }

        let rest = &trimmed[MARKER.len()..];
        let rest = rest.strip_prefix('\r').unwrap_or(rest);
        let Some(rest) = rest.strip_prefix('\n') else {
            // Opening marker is not a line of its own
            return Ok((FrontMatter::default(), content));
        };

        let (yaml_content, after) = if let Some(after) = rest.strip_prefix(MARKER) {
            // Closing marker immediately follows: an empty block
            ("", after)
        } else if let Some(end_pos) = rest.find("\n---") {
            (&rest[..end_pos], &rest[end_pos + 4..])
        } else {
            // No closing marker, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let body = after.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)?;
        Ok((fm, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_frontmatter() {
        let content = r#"---
title: Flight Telemetry Dashboard
date: 2024-05-10
tags:
  - rust
  - avionics
summary: Real-time telemetry visualization.
thumbnail: /images/telemetry.png
featured: true
order: 1
github: https://github.com/example/telemetry
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Flight Telemetry Dashboard".to_string()));
        assert_eq!(fm.date, Some("2024-05-10".to_string()));
        assert_eq!(fm.tags, vec!["rust", "avionics"]);
        assert_eq!(
            fm.summary,
            Some("Real-time telemetry visualization.".to_string())
        );
        assert!(fm.featured);
        assert_eq!(fm.order, Some(1));
        assert_eq!(
            fm.github,
            Some("https://github.com/example/telemetry".to_string())
        );
        assert_eq!(fm.demo, None);
        assert!(body.contains("This is the content."));
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = r#"---
title: Single Tag Post
date: 2024-01-15
tags: Notes
---

Content here.
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Single Tag Post".to_string()));
        assert_eq!(fm.tags, vec!["Notes"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body with no metadata.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_no_closing_marker() {
        let content = "---\ntitle: Dangling\nNo closing marker here.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block_yields_defaults() {
        let content = "---\n---\nBody only.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(fm.tags.is_empty());
        assert_eq!(fm.summary, None);
        assert!(!fm.featured);
        assert_eq!(fm.order, None);
        assert!(body.contains("Body only."));
    }

    #[test]
    fn test_malformed_block_is_error() {
        let content = "---\ntitle: \"unterminated\n---\n\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_order_from_numeric_string() {
        let content = "---\norder: \"3\"\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.order, Some(3));
    }

    #[test]
    fn test_order_from_float_truncates() {
        let content = "---\norder: 2.7\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.order, Some(2));
    }

    #[test]
    fn test_order_garbage_treated_as_absent() {
        let content = "---\norder: soon\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.order, None);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let content = "---\ntitle: Post\ndraft_note: keep quiet\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Post".to_string()));
        assert!(fm.extra.contains_key("draft_note"));
    }

    #[test]
    fn test_roundtrip_recognized_fields() {
        let content = r#"---
title: Roundtrip
date: 2024-06-01
tags:
  - one
  - two
summary: A summary.
featured: true
order: 5
---
Body text.
"#;
        let (fm, _) = FrontMatter::parse(content).unwrap();

        let reserialized = format!(
            "---\n{}---\nBody text.\n",
            serde_yaml::to_string(&fm).unwrap()
        );
        let (fm2, body2) = FrontMatter::parse(&reserialized).unwrap();

        assert_eq!(fm, fm2);
        assert!(body2.contains("Body text."));
    }
}
