use rust_decimal::Decimal;

use super::*;

/// Expect the list to match the stored recipes serialized newest first
#[tokio::test]
async fn retrieve_recipes() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    test.recipe()
        .sample_recipe(user.id, RecipeOverrides::default())
        .await?;

    let res = client.get(recipes_url()).await;

    // Compared against every stored recipe rather than the user's; only this user has any.
    let recipes = RecipeRepository::new(&test.state.db).get_all().await?;
    let serialized = RecipeService::new(&test.state.db)
        .serialize_list(recipes)
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json::<Value>()?, serde_json::to_value(&serialized)?);

    Ok(())
}

/// Expect only recipes owned by the logged in user
#[tokio::test]
async fn recipes_limited_to_user() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    let other_user = test.user().insert_other_user().await?;
    test.recipe()
        .sample_recipe(other_user.id, RecipeOverrides::default())
        .await?;
    test.recipe()
        .sample_recipe(user.id, RecipeOverrides::default())
        .await?;

    let res = client.get(recipes_url()).await;

    let recipes = RecipeRepository::new(&test.state.db)
        .get_by_user_id(user.id)
        .await?;
    let serialized = RecipeService::new(&test.state.db)
        .serialize_list(recipes)
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::OK);
    let body: Vec<Value> = res.json()?;
    assert_eq!(body.len(), 1);
    assert_eq!(Value::Array(body), serde_json::to_value(&serialized)?);

    Ok(())
}

/// Expect the detail rendering with nested tag & ingredient
#[tokio::test]
async fn view_recipe_detail() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    let recipe = test
        .recipe()
        .sample_recipe(user.id, RecipeOverrides::default())
        .await?;
    let tag = test.recipe().sample_tag(user.id).await?;
    let ingredient = test.recipe().sample_ingredient(user.id).await?;
    test.recipe().add_tag(recipe.id, tag.id).await?;
    test.recipe().add_ingredient(recipe.id, ingredient.id).await?;

    let res = client.get(&detail_url(recipe.id)).await;

    let serialized = RecipeService::new(&test.state.db)
        .serialize_detail(recipe)
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::OK);
    let body: Value = res.json()?;
    assert_eq!(body, serde_json::to_value(&serialized)?);
    assert_eq!(body["tags"], json!([{ "id": tag.id, "name": SAMPLE_TAG_NAME }]));
    assert_eq!(
        body["ingredients"],
        json!([{ "id": ingredient.id, "name": SAMPLE_INGREDIENT_NAME }])
    );
    assert_eq!(body["price"], json!("5.00"));

    Ok(())
}

/// Expect 404 for a recipe owned by another user
#[tokio::test]
async fn detail_of_other_users_recipe_not_found() -> Result<(), TestError> {
    let (test, _, mut client) = authenticated_setup().await?;
    let other_user = test.user().insert_other_user().await?;
    let recipe = test
        .recipe()
        .sample_recipe(other_user.id, RecipeOverrides::default())
        .await?;

    let res = client.get(&detail_url(recipe.id)).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a recipe ID that does not exist
#[tokio::test]
async fn detail_of_nonexistent_recipe_not_found() -> Result<(), TestError> {
    let (_test, _, mut client) = authenticated_setup().await?;

    let res = client.get(&detail_url(999)).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect identical bodies for repeated requests without writes in between
#[tokio::test]
async fn repeated_requests_are_identical() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    let recipe = test
        .recipe()
        .sample_recipe(user.id, RecipeOverrides::default())
        .await?;
    let tag = test.recipe().sample_tag(user.id).await?;
    test.recipe().add_tag(recipe.id, tag.id).await?;

    let first = client.get(recipes_url()).await;
    let second = client.get(recipes_url()).await;
    assert_eq!(first.body, second.body);

    let first = client.get(&detail_url(recipe.id)).await;
    let second = client.get(&detail_url(recipe.id)).await;
    assert_eq!(first.body, second.body);

    Ok(())
}

/// Expect 201 with the detail rendering of the created recipe
#[tokio::test]
async fn create_recipe_with_tags_and_ingredients() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    let tag = test.recipe().sample_tag(user.id).await?;
    let ingredient = test.recipe().sample_ingredient(user.id).await?;

    let payload = json!({
        "title": "Cinnamon buns",
        "time_minutes": 45,
        "price": "12.50",
        "tags": [tag.id, tag.id],
        "ingredients": [ingredient.id],
    });
    let res = client.post(recipes_url(), &payload).await;

    assert_eq!(res.status, StatusCode::CREATED);
    let body: Value = res.json()?;
    assert_eq!(body["title"], json!("Cinnamon buns"));
    assert_eq!(body["price"], json!("12.50"));
    assert_eq!(body["link"], json!(""));
    assert_eq!(body["tags"], json!([{ "id": tag.id, "name": SAMPLE_TAG_NAME }]));

    let recipes = RecipeRepository::new(&test.state.db)
        .get_by_user_id(user.id)
        .await?;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].price_cents, 1250);
    assert_eq!(body["id"], json!(recipes[0].id));

    Ok(())
}

/// Expect 400 and nothing created when referencing another user's tag
#[tokio::test]
async fn create_recipe_with_foreign_tag_rejected() -> Result<(), TestError> {
    let (test, _, mut client) = authenticated_setup().await?;
    let other_user = test.user().insert_other_user().await?;
    let foreign_tag = test.recipe().sample_tag(other_user.id).await?;

    let payload = json!({
        "title": "Cinnamon buns",
        "time_minutes": 45,
        "price": Decimal::new(500, 2),
        "tags": [foreign_tag.id],
    });
    let res = client.post(recipes_url(), &payload).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let recipes = RecipeRepository::new(&test.state.db).get_all().await?;
    assert!(recipes.is_empty());

    Ok(())
}

/// Expect 400 and nothing created for a price too large to store
#[tokio::test]
async fn create_recipe_with_huge_price_rejected() -> Result<(), TestError> {
    let (test, _, mut client) = authenticated_setup().await?;

    let payload = json!({
        "title": "Golden cake",
        "time_minutes": 90,
        "price": Decimal::MAX,
    });
    let res = client.post(recipes_url(), &payload).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body: Value = res.json()?;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid price"));
    let recipes = RecipeRepository::new(&test.state.db).get_all().await?;
    assert!(recipes.is_empty());

    Ok(())
}

/// Expect 400 naming the field for a blank title
#[tokio::test]
async fn create_recipe_with_blank_title_rejected() -> Result<(), TestError> {
    let (test, _, mut client) = authenticated_setup().await?;

    let payload = json!({
        "title": "   ",
        "time_minutes": 5,
        "price": "1.00",
    });
    let res = client.post(recipes_url(), &payload).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body: Value = res.json()?;
    assert!(body["error"].as_str().unwrap().contains("title"));
    let recipes = RecipeRepository::new(&test.state.db).get_all().await?;
    assert!(recipes.is_empty());

    Ok(())
}

/// Expect a created recipe to appear in the list
#[tokio::test]
async fn created_recipe_is_listed() -> Result<(), TestError> {
    let (_test, _, mut client) = authenticated_setup().await?;

    let payload = json!({
        "title": "Pancakes",
        "time_minutes": 15,
        "price": "3.20",
        "link": "https://example.com/pancakes",
    });
    let created = client.post(recipes_url(), &payload).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created: Value = created.json()?;

    let res = client.get(recipes_url()).await;

    let body: Vec<Value> = res.json()?;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], created["id"]);
    assert_eq!(body[0]["tags"], json!([]));
    assert_eq!(body[0]["link"], json!("https://example.com/pancakes"));

    Ok(())
}
