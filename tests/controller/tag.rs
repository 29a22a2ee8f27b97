use recipe_app::server::route::Route;
use serde_json::{json, Value};

use super::*;

fn tags_url() -> &'static str {
    Route::TagList.template()
}

/// Expect 401 when listing tags without logging in
#[tokio::test]
async fn login_required() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let mut client = ApiClient::new(&test);

    let res = client.get(tags_url()).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect only the user's tags, ordered by name descending
#[tokio::test]
async fn retrieve_tags_limited_to_user() -> Result<(), TestError> {
    let (test, user, mut client) = authenticated_setup().await?;
    let other_user = test.user().insert_other_user().await?;
    let vegan = test.recipe().tag(user.id, "Vegan").await?;
    let dessert = test.recipe().tag(user.id, "Dessert").await?;
    test.recipe().tag(other_user.id, "Fruity").await?;

    let res = client.get(tags_url()).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json::<Value>()?,
        json!([
            { "id": vegan.id, "name": "Vegan" },
            { "id": dessert.id, "name": "Dessert" },
        ])
    );

    Ok(())
}

/// Expect 201 for a new tag and 400 for a blank name
#[tokio::test]
async fn create_tag() -> Result<(), TestError> {
    let (_test, _, mut client) = authenticated_setup().await?;

    let res = client.post(tags_url(), &json!({ "name": "Breakfast" })).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json::<Value>()?["name"], json!("Breakfast"));

    let res = client.post(tags_url(), &json!({ "name": "" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    Ok(())
}
