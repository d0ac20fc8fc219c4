//! Data models for the article submission workflow.
//!
//! These models match the GraphQL backend's createArticle contract exactly for
//! seamless interoperability.

mod article;

pub use article::*;
