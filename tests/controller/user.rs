use axum::response::IntoResponse;
use recipe_app::server::{
    controller::user::logout, model::session::user::SessionUserId, route::Route,
};
use serde_json::{json, Value};

use super::*;

/// Expect 201 for a new account and the password to be usable for login
#[tokio::test]
async fn create_user_then_login() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let res = client
        .post(
            Route::UserCreate.template(),
            &json!({
                "email": TEST_USER_EMAIL,
                "password": TEST_USER_PASSWORD,
                "name": TEST_USER_NAME,
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let body: Value = res.json()?;
    assert_eq!(body["email"], json!(TEST_USER_EMAIL));
    assert!(body.get("password").is_none());

    let res = client
        .post(
            Route::UserLogin.template(),
            &json!({ "email": TEST_USER_EMAIL, "password": TEST_USER_PASSWORD }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let res = client.get(Route::UserMe.template()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json::<Value>()?["email"], json!(TEST_USER_EMAIL));

    Ok(())
}

/// Expect 400 when registering an email twice
#[tokio::test]
async fn create_user_with_existing_email_rejected() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    test.user().insert_test_user().await?;
    let mut client = ApiClient::new(&test);

    let res = client
        .post(
            Route::UserCreate.template(),
            &json!({ "email": TEST_USER_EMAIL, "password": TEST_USER_PASSWORD }),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 naming each invalid field for a malformed email and short password
#[tokio::test]
async fn create_user_with_invalid_fields_rejected() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let res = client
        .post(
            Route::UserCreate.template(),
            &json!({ "email": "not-an-email", "password": "pw" }),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body: Value = res.json()?;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Enter a valid email address"), "{message}");
    assert!(message.contains("Password must be at least 5 characters long"), "{message}");

    Ok(())
}

/// Expect 400 and no session for a wrong password
#[tokio::test]
async fn login_with_invalid_credentials_rejected() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    test.user().insert_test_user().await?;
    let mut client = ApiClient::new(&test);

    let res = client
        .post(
            Route::UserLogin.template(),
            &json!({ "email": TEST_USER_EMAIL, "password": "wrongpass" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = client.get(Route::UserMe.template()).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 after logging out
#[tokio::test]
async fn logout_ends_session() -> Result<(), TestError> {
    let (_test, _, mut client) = authenticated_setup().await?;

    let res = client.get(Route::UserMe.template()).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = client.get(Route::UserLogout.template()).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = client.get(Route::UserMe.template()).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and a cleared session when the session user no longer exists
#[tokio::test]
async fn me_with_unknown_session_user_unauthorized() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);
    client.force_authenticate(1).await?;

    let res = client.get(Route::UserMe.template()).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 after logout with a user ID in session
#[tokio::test]
async fn logout_clears_user_from_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

/// Expect 200 after logout even without session data
#[tokio::test]
async fn logout_without_session_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
