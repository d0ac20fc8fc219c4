//! Submission translator: draft state → createArticle variables.

use chrono::{SecondsFormat, Utc};

use crate::accounts::AccountDirectory;
use crate::errors::AppError;
use crate::models::{ArticleDraftState, ArticleMutationVariables};

/// Serializes an opaque rich-text editor session into the backend's content
/// string. The editor engine lives outside this crate; pre-serialized content
/// can be carried as a plain `String`.
pub trait EditorContent {
    fn to_content_string(&self) -> String;
}

impl EditorContent for String {
    fn to_content_string(&self) -> String {
        self.clone()
    }
}

impl EditorContent for &str {
    fn to_content_string(&self) -> String {
        (*self).to_string()
    }
}

/// Base-10 coercion of the form's numeric text fields.
///
/// Mirrors the frontend's historical `parseInt` semantics: leading whitespace
/// and sign are accepted, parsing stops at the first non-digit, and text with
/// no leading digits yields `None` (which serializes as `null`; the server's
/// validation is the backstop).
pub fn parse_numeric_text(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    digits
        .parse::<i32>()
        .ok()
        .map(|n| if negative { -n } else { n })
}

/// Build the mutation variables for one submission attempt.
///
/// Awaits contributor-id resolution through `directory`; a resolution failure
/// rejects the whole attempt. `created_at` is stamped at call time, not from
/// the draft's `date` field.
pub async fn build_variables<E: EditorContent>(
    draft: &ArticleDraftState<E>,
    publish: bool,
    directory: &dyn AccountDirectory,
) -> Result<ArticleMutationVariables, AppError> {
    let contributors = directory.resolve_ids(&draft.contributors).await?;

    Ok(ArticleMutationVariables {
        title: draft.title.clone(),
        section_id: parse_numeric_text(&draft.section),
        content: draft.editor_state.to_content_string(),
        summary: Some(draft.focus.clone()),
        created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        outquotes: Vec::new(),
        volume: parse_numeric_text(&draft.volume),
        issue: parse_numeric_text(&draft.issue),
        contributors,
        is_published: publish,
        media_ids: draft
            .media
            .iter()
            .map(|m| parse_numeric_text(&m.id))
            .collect(),
    })
}
