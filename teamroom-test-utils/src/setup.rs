use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory sqlite database with no tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Connects and creates every table from the entity definitions.
    pub async fn with_all_tables() -> Result<Self, TestError> {
        let setup = TestSetup::new().await?;

        let schema = Schema::new(DbBackend::Sqlite);
        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::Role),
            schema.create_table_from_entity(entity::prelude::Permission),
            schema.create_table_from_entity(entity::prelude::RolePermission),
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::TeamType),
            schema.create_table_from_entity(entity::prelude::Team),
            schema.create_table_from_entity(entity::prelude::TeamUser),
            schema.create_table_from_entity(entity::prelude::Room),
            schema.create_table_from_entity(entity::prelude::RoomFeature),
            schema.create_table_from_entity(entity::prelude::RoomFeatureAssignment),
            schema.create_table_from_entity(entity::prelude::Reservation),
        ];
        setup.with_tables(stmts).await?;

        Ok(setup)
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
