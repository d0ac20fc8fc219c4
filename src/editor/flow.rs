//! Mutation executor wiring the create-article screen together.

use std::sync::Arc;

use crate::accounts::AccountDirectory;
use crate::errors::AppError;
use crate::graphql::{create_article_document, CreateArticleData, GraphqlClient};
use crate::models::{ArticleDraftState, CreatedArticle};
use crate::notify::{Notification, Notifier};

use super::navigation::NavigationController;
use super::translate::{build_variables, EditorContent};

/// One create-article screen's submission flow.
///
/// Owns the navigation controller for its screen; the contributor directory
/// and notification service are injected, and the notifier may be shared by
/// any number of concurrent form instances.
pub struct CreateArticleFlow {
    client: GraphqlClient,
    directory: Arc<dyn AccountDirectory>,
    notifier: Arc<dyn Notifier>,
    navigation: NavigationController,
}

impl CreateArticleFlow {
    pub fn new(
        client: GraphqlClient,
        directory: Arc<dyn AccountDirectory>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            directory,
            notifier,
            navigation: NavigationController::new(),
        }
    }

    /// The redirect state for this screen.
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    /// Submit the current draft, publishing it when `publish` is true.
    ///
    /// Called by the presentational form when the user requests a post/save.
    /// On success a toast is enqueued and the navigation target is set to
    /// `/articles` (publish) or `/` (draft). On mutation failure a failure
    /// toast is enqueued and the error returned; the attempt is terminal, no
    /// retry. Contributor-resolution errors propagate without a toast.
    ///
    /// Taking `&mut self` keeps submissions on one screen strictly
    /// one-at-a-time.
    pub async fn submit<E: EditorContent>(
        &mut self,
        draft: &ArticleDraftState<E>,
        publish: bool,
    ) -> Result<CreatedArticle, AppError> {
        let variables = build_variables(draft, publish, self.directory.as_ref()).await?;

        let document = create_article_document();
        match self
            .client
            .execute::<_, CreateArticleData>(&document, &variables)
            .await
        {
            Ok(data) => {
                tracing::info!(
                    article_id = %data.create_article.id,
                    publish,
                    "Article created"
                );
                self.notifier.notify(Notification::created(publish));
                self.navigation
                    .redirect_to(NavigationController::route_for(publish));
                Ok(data.create_article)
            }
            Err(err) => {
                tracing::warn!(publish, "Article creation failed: {}", err);
                self.notifier.notify(Notification::failed(publish));
                Err(err)
            }
        }
    }
}
