//! GraphQL operation documents for the submission workflow.

use serde::{Deserialize, Serialize};

use crate::models::CreatedArticle;

/// The createArticle mutation, without the media fragment.
pub const CREATE_ARTICLE_MUTATION: &str = r#"
mutation createArticle(
    $title: String!,
    $section_id: Int!,
    $content: String!,
    $summary: String,
    $created_at: String,
    $outquotes: [String!],
    $volume: Int!,
    $issue: Int!,
    $contributors: [Int!]!,
    $is_published: Boolean,
    $media_ids: [Int!]) {
        createArticle(
            title: $title,
            section_id: $section_id,
            content: $content,
            summary: $summary,
            created_at: $created_at,
            outquotes: $outquotes,
            volume: $volume,
            issue: $issue,
            contributors: $contributors,
            is_published: $is_published,
            media_ids: $media_ids
        ) {
            id
            title
            media {
                ...MediumExtensionInfo
            }
        }
    }
"#;

/// Fragment expanding a medium's display fields.
pub const MEDIUM_EXTENSION_INFO_FRAGMENT: &str = r#"
fragment MediumExtensionInfo on Medium {
    id
    title
    media_type
    attachment_url
}
"#;

/// Per-name account lookup used to resolve contributor bylines.
pub const ACCOUNT_ID_QUERY: &str = r#"
query accountIdByName($name: String!) {
    userByName(name: $name) {
        id
    }
}
"#;

/// The full createArticle document: mutation plus its fragment.
pub fn create_article_document() -> String {
    format!("{CREATE_ARTICLE_MUTATION}{MEDIUM_EXTENSION_INFO_FRAGMENT}")
}

/// `data` payload of the createArticle mutation.
#[derive(Debug, Deserialize)]
pub struct CreateArticleData {
    #[serde(rename = "createArticle")]
    pub create_article: CreatedArticle,
}

/// Variables of the account lookup query.
#[derive(Debug, Serialize)]
pub struct AccountIdVariables<'a> {
    pub name: &'a str,
}

/// `data` payload of the account lookup query.
#[derive(Debug, Deserialize)]
pub struct AccountIdData {
    #[serde(rename = "userByName")]
    pub user_by_name: Option<AccountRef>,
}

/// A bare account reference.
#[derive(Debug, Deserialize)]
pub struct AccountRef {
    pub id: i32,
}
