pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use fixtures::recipe::factory::RecipeOverrides;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::recipe::factory, test_setup_with_recipe_tables,
        test_setup_with_tables, RecipeOverrides, TestError, TestSetup,
    };
}
