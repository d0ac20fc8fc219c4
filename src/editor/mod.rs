//! The create-article editor workflow.
//!
//! Glue between the presentational form and the GraphQL backend: translating
//! draft state into mutation variables, executing the mutation, and steering
//! the post-submission toast and redirect.

mod flow;
mod navigation;
mod translate;

pub use flow::*;
pub use navigation::*;
pub use translate::*;
