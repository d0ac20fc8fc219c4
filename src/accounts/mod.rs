//! Contributor account resolution.
//!
//! The form holds contributor display names; the backend wants numeric account
//! ids. [`AccountDirectory`] is the capability the submission translator awaits
//! to bridge the two, and [`GraphqlAccountDirectory`] is the production
//! implementation backed by the GraphQL endpoint.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::graphql::{AccountIdData, AccountIdVariables, GraphqlClient, ACCOUNT_ID_QUERY};

/// Resolves contributor display names to numeric account ids.
///
/// Implementations must preserve input order: the id at position `i`
/// corresponds to the name at position `i`.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn resolve_ids(&self, names: &[String]) -> Result<Vec<i32>, AppError>;
}

/// Account directory backed by the GraphQL backend's user lookup query.
#[derive(Debug, Clone)]
pub struct GraphqlAccountDirectory {
    client: GraphqlClient,
}

impl GraphqlAccountDirectory {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountDirectory for GraphqlAccountDirectory {
    async fn resolve_ids(&self, names: &[String]) -> Result<Vec<i32>, AppError> {
        let mut ids = Vec::with_capacity(names.len());

        for name in names {
            let data: AccountIdData = self
                .client
                .execute(ACCOUNT_ID_QUERY, &AccountIdVariables { name })
                .await?;

            match data.user_by_name {
                Some(account) => ids.push(account.id),
                None => {
                    return Err(AppError::NotFound(format!(
                        "No account found for contributor \"{}\"",
                        name
                    )))
                }
            }
        }

        Ok(ids)
    }
}
