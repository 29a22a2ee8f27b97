//! Tests for HTTP controller endpoints.
//!
//! Requests go through the complete router, including the session layer, so access control
//! and response rendering are verified as a client observes them.

mod ingredient;
mod recipe;
mod tag;
mod user;

use axum::http::StatusCode;
use recipe_test_utils::{model::UserModel, prelude::*};

use crate::util::ApiClient;

/// Sets up the recipe tables with the default test user logged in.
async fn authenticated_setup() -> Result<(TestSetup, UserModel, ApiClient), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.user().insert_test_user().await?;

    let mut client = ApiClient::new(&test);
    client.force_authenticate(user.id).await?;

    Ok((test, user, client))
}
