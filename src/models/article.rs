//! Article draft state and createArticle mutation variables.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A media attachment reference as held by the form.
///
/// Ids arrive from the media picker as strings and are coerced to integers
/// only at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: String,
}

impl MediaRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// In-progress form state for a new article.
///
/// Created once at form mount with empty defaults, mutated exclusively by the
/// presentational form, and discarded on navigation away. `E` is the opaque
/// rich-text editor session; it is serialized through
/// [`crate::editor::EditorContent`] at submission time.
#[derive(Debug, Clone)]
pub struct ArticleDraftState<E> {
    pub title: String,
    /// Numeric text, parsed base-10 at submission
    pub volume: String,
    /// Numeric text, parsed base-10 at submission
    pub issue: String,
    /// Numeric text mapping to a section (category) id
    pub section: String,
    /// One-line summary shown in article listings
    pub focus: String,
    /// ISO-8601 timestamp fixed when the form mounts
    pub date: String,
    /// Contributor display names, in byline order
    pub contributors: Vec<String>,
    pub media: Vec<MediaRef>,
    pub editor_state: E,
}

impl<E> ArticleDraftState<E> {
    /// The default empty-article state, dated now.
    pub fn new(editor_state: E) -> Self {
        Self {
            title: String::new(),
            volume: String::new(),
            issue: String::new(),
            section: String::new(),
            focus: String::new(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            contributors: Vec::new(),
            media: Vec::new(),
            editor_state,
        }
    }
}

/// Variables for the createArticle mutation.
///
/// Derived once per submission attempt from [`ArticleDraftState`]; immutable
/// after construction and sent verbatim to the backend. Numeric fields are
/// `Option<i32>` because the form's numeric text is coerced best-effort:
/// malformed text becomes `null` on the wire and the server's validation is
/// the backstop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleMutationVariables {
    pub title: String,
    pub section_id: Option<i32>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub outquotes: Vec<String>,
    pub volume: Option<i32>,
    pub issue: Option<i32>,
    pub contributors: Vec<i32>,
    pub is_published: bool,
    pub media_ids: Vec<Option<i32>>,
}

/// A medium as expanded by the MediumExtensionInfo fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediumExtension {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

/// The server's view of a freshly created article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedArticle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub media: Vec<MediumExtension>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_new_draft_is_empty_and_dated() {
        let draft = ArticleDraftState::new(String::new());

        assert!(draft.title.is_empty());
        assert!(draft.volume.is_empty());
        assert!(draft.issue.is_empty());
        assert!(draft.section.is_empty());
        assert!(draft.focus.is_empty());
        assert!(draft.contributors.is_empty());
        assert!(draft.media.is_empty());
        assert!(DateTime::parse_from_rfc3339(&draft.date).is_ok());
    }

    #[test]
    fn test_variables_serialize_with_wire_names() {
        let variables = ArticleMutationVariables {
            title: "Headline".to_string(),
            section_id: Some(5),
            content: "Body".to_string(),
            summary: Some("Focus".to_string()),
            created_at: Some("2024-09-01T12:00:00.000Z".to_string()),
            outquotes: Vec::new(),
            volume: Some(109),
            issue: Some(3),
            contributors: vec![12, 34],
            is_published: true,
            media_ids: vec![Some(10), Some(11)],
        };

        let value = serde_json::to_value(&variables).unwrap();
        assert_eq!(value["section_id"], 5);
        assert_eq!(value["is_published"], true);
        assert_eq!(value["media_ids"], serde_json::json!([10, 11]));
        assert_eq!(value["outquotes"], serde_json::json!([]));
    }

    #[test]
    fn test_malformed_numeric_fields_serialize_as_null() {
        let variables = ArticleMutationVariables {
            title: String::new(),
            section_id: None,
            content: String::new(),
            summary: None,
            created_at: None,
            outquotes: Vec::new(),
            volume: None,
            issue: None,
            contributors: Vec::new(),
            is_published: false,
            media_ids: vec![None],
        };

        let value = serde_json::to_value(&variables).unwrap();
        assert!(value["volume"].is_null());
        assert!(value["section_id"].is_null());
        assert_eq!(value["media_ids"], serde_json::json!([null]));
        // Optional fields are omitted rather than nulled
        assert!(value.get("summary").is_none());
    }
}
