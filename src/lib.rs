//! Copydesk article submission workflow.
//!
//! Client-side core for the "create article" screen of the Copydesk editorial
//! frontend: translates an in-progress draft into `createArticle` mutation
//! variables, executes the mutation against the GraphQL backend, emits toast
//! notifications, and drives the post-publish redirect.
//!
//! The rich-text serializer, contributor directory, and notification service
//! are collaborators injected at the trait seams ([`editor::EditorContent`],
//! [`accounts::AccountDirectory`], [`notify::Notifier`]); this crate defines
//! how they are called, plus GraphQL-backed default implementations.

pub mod accounts;
pub mod config;
pub mod editor;
pub mod errors;
pub mod graphql;
pub mod models;
pub mod notify;

pub use accounts::{AccountDirectory, GraphqlAccountDirectory};
pub use config::Config;
pub use editor::{CreateArticleFlow, EditorContent, NavigationController};
pub use errors::AppError;
pub use graphql::GraphqlClient;
pub use models::{ArticleDraftState, ArticleMutationVariables, CreatedArticle, MediaRef};
pub use notify::{Notification, NotificationQueue, Notifier};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the embedding application.
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
