//! Symbolic route names and reversal into concrete paths.
//!
//! Handlers, tests and clients refer to endpoints by name (`recipe:recipe-detail`) instead of
//! literal URLs. Templates use axum's `{param}` placeholder syntax and are the same strings
//! registered with the router.

use crate::server::error::route::RouteError;

/// Named API route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `user:create`
    UserCreate,
    /// `user:login`
    UserLogin,
    /// `user:logout`
    UserLogout,
    /// `user:me`
    UserMe,
    /// `recipe:recipe-list`
    RecipeList,
    /// `recipe:recipe-detail`
    RecipeDetail,
    /// `recipe:tag-list`
    TagList,
    /// `recipe:ingredient-list`
    IngredientList,
}

impl Route {
    /// Every registered route.
    pub const ALL: [Route; 8] = [
        Route::UserCreate,
        Route::UserLogin,
        Route::UserLogout,
        Route::UserMe,
        Route::RecipeList,
        Route::RecipeDetail,
        Route::TagList,
        Route::IngredientList,
    ];

    /// Namespaced route name, `app:view`.
    pub fn name(&self) -> &'static str {
        match self {
            Route::UserCreate => "user:create",
            Route::UserLogin => "user:login",
            Route::UserLogout => "user:logout",
            Route::UserMe => "user:me",
            Route::RecipeList => "recipe:recipe-list",
            Route::RecipeDetail => "recipe:recipe-detail",
            Route::TagList => "recipe:tag-list",
            Route::IngredientList => "recipe:ingredient-list",
        }
    }

    /// Path template as registered with the router.
    pub fn template(&self) -> &'static str {
        match self {
            Route::UserCreate => "/api/user/create/",
            Route::UserLogin => "/api/user/login/",
            Route::UserLogout => "/api/user/logout/",
            Route::UserMe => "/api/user/me/",
            Route::RecipeList => "/api/recipe/recipes/",
            Route::RecipeDetail => "/api/recipe/recipes/{id}/",
            Route::TagList => "/api/recipe/tags/",
            Route::IngredientList => "/api/recipe/ingredients/",
        }
    }

    /// Resolves a route by its namespaced name.
    pub fn from_name(name: &str) -> Result<Self, RouteError> {
        Self::ALL
            .iter()
            .copied()
            .find(|route| route.name() == name)
            .ok_or_else(|| RouteError::NoReverseMatch(name.to_string()))
    }

    /// Number of `{param}` placeholders in the template.
    pub fn arity(&self) -> usize {
        self.template().matches('{').count()
    }

    /// Substitutes positional `args` into the template.
    ///
    /// Arguments are integer IDs and are written into the path unencoded.
    ///
    /// # Returns
    /// - `Ok(String)` - Concrete path
    /// - `Err(RouteError::ArgumentMismatch)` - `args` does not match the placeholder count
    pub fn reverse(&self, args: &[i32]) -> Result<String, RouteError> {
        if args.len() != self.arity() {
            return Err(RouteError::ArgumentMismatch {
                name: self.name(),
                expected: self.arity(),
                given: args.len(),
            });
        }

        Ok(substitute(self.template(), args))
    }
}

/// Resolves `name` and reverses it with `args`.
pub fn reverse(name: &str, args: &[i32]) -> Result<String, RouteError> {
    Route::from_name(name)?.reverse(args)
}

/// Path of the recipe list endpoint.
pub fn recipes_url() -> &'static str {
    Route::RecipeList.template()
}

/// Path of the detail endpoint for `recipe_id`.
pub fn detail_url(recipe_id: i32) -> String {
    substitute(Route::RecipeDetail.template(), &[recipe_id])
}

fn substitute(template: &str, args: &[i32]) -> String {
    let mut path = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);

        let end = rest[start..]
            .find('}')
            .map_or(rest.len(), |offset| start + offset + 1);
        if let Some(arg) = args.next() {
            path.push_str(&arg.to_string());
        }

        rest = &rest[end..];
    }
    path.push_str(rest);

    path
}
