use recipe_app::server::route::reverse;
use serde_json::{json, Value};

use super::*;

fn ingredients_url() -> String {
    reverse("recipe:ingredient-list", &[]).unwrap()
}

/// Expect 401 when listing ingredients without logging in
#[tokio::test]
async fn login_required() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let res = client.get(&ingredients_url()).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect only the user's ingredients, ordered by name descending
#[tokio::test]
async fn retrieve_ingredients_limited_to_user() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    let other_user = test.user().insert_other_user().await?;
    let cinnamon = test.recipe().sample_ingredient(user.id).await?;
    let salt = test.recipe().ingredient(user.id, "Salt").await?;
    test.recipe().ingredient(other_user.id, "Kale").await?;

    let res = client.get(&ingredients_url()).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json::<Value>()?,
        json!([
            { "id": salt.id, "name": "Salt" },
            { "id": cinnamon.id, "name": SAMPLE_INGREDIENT_NAME },
        ])
    );

    Ok(())
}

/// Expect 201 with the created ingredient
#[tokio::test]
async fn create_ingredient() -> Result<(), TestError> {
    let (_test, _, mut client) = authenticated_setup().await?;

    let res = client
        .post(&ingredients_url(), &json!({ "name": "Cabbage" }))
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json::<Value>()?["name"], json!("Cabbage"));

    Ok(())
}
