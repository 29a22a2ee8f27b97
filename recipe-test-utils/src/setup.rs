use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

/// Per-test environment.
///
/// Every setup owns a fresh in-memory SQLite database, so rows written by one test are
/// discarded together with its `TestSetup` regardless of how the test exits.
pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
    pub store: Arc<MemoryStore>,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store.clone(), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
            store,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_recipe_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::RecipeUser),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeTag),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
