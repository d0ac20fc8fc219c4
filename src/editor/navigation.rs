//! Post-submission navigation controller.

/// Route shown after publishing an article.
pub const ARTICLES_ROUTE: &str = "/articles";

/// Route shown after saving a draft (the home/drafts view).
pub const HOME_ROUTE: &str = "/";

/// Two-state redirect machine for the create-article screen.
///
/// Starts `Idle`; moves to `Redirecting` exactly once, on mutation success.
/// There is no transition back: the screen is expected to be torn down once
/// the redirect renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    target: Option<String>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending redirect path, if any. `None` means remain on this screen.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_redirecting(&self) -> bool {
        self.target.is_some()
    }

    /// Request a redirect. The first request wins; later calls are ignored.
    pub fn redirect_to(&mut self, path: &str) {
        if self.target.is_none() {
            tracing::debug!(path, "Navigation target set");
            self.target = Some(path.to_string());
        }
    }

    /// Route for a completed submission with the given publish intent.
    pub fn route_for(publish: bool) -> &'static str {
        if publish {
            ARTICLES_ROUTE
        } else {
            HOME_ROUTE
        }
    }
}
