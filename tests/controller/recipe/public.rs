use super::*;

/// Expect 401 when listing recipes without logging in
#[tokio::test]
async fn login_required_for_list() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let res = client.get(recipes_url()).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 when viewing a recipe without logging in
#[tokio::test]
async fn login_required_for_detail() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.user().insert_test_user().await?;
    let recipe = test
        .recipe()
        .sample_recipe(user.id, RecipeOverrides::default())
        .await?;
    let mut client = ApiClient::new(&test);

    let res = client.get(&detail_url(recipe.id)).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and nothing created when posting a recipe without logging in
#[tokio::test]
async fn login_required_for_create() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let payload = json!({
        "title": "Chocolate cheesecake",
        "time_minutes": 30,
        "price": "5.00",
    });
    let res = client.post(recipes_url(), &payload).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    let recipes = RecipeRepository::new(&test.state.db).get_all().await?;
    assert!(recipes.is_empty());

    Ok(())
}

/// Expect the unauthenticated error body to name the missing credentials
#[tokio::test]
async fn unauthorized_body_describes_error() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let res = client.get(recipes_url()).await;

    let body: Value = res.json()?;
    assert_eq!(
        body,
        json!({ "error": "Authentication credentials were not provided." })
    );

    Ok(())
}
