//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

#[derive(OpenApi)]
#[openapi(info(title = "Recipe API", description = "Recipe app API"), tags(
    (name = controller::user::USER_TAG, description = "User account API routes"),
    (name = controller::recipe::RECIPE_TAG, description = "Recipe, tag and ingredient API routes"),
))]
struct ApiDoc;

/// Builds the API router and the OpenAPI document describing it.
///
/// Every path registered here matches the template of a named [`Route`](crate::server::route::Route).
pub fn split_routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::login))
        .routes(routes!(controller::user::logout))
        .routes(routes!(controller::user::get_me))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::get_recipe))
        .routes(routes!(
            controller::tag::list_tags,
            controller::tag::create_tag
        ))
        .routes(routes!(
            controller::ingredient::list_ingredients,
            controller::ingredient::create_ingredient
        ))
        .split_for_parts()
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/user/create/` - Register a user
/// - `POST /api/user/login/` - Log in with email & password
/// - `GET /api/user/logout/` - Logout current user
/// - `GET /api/user/me/` - Get current user information
/// - `GET|POST /api/recipe/recipes/` - List or create the user's recipes
/// - `GET /api/recipe/recipes/{id}/` - Get one of the user's recipes
/// - `GET|POST /api/recipe/tags/` - List or create the user's tags
/// - `GET|POST /api/recipe/ingredients/` - List or create the user's ingredients
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    let (routes, api) = split_routes();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
