use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::StorageEntry;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(StorageEntry::Table)
        .col(
            ColumnDef::new(StorageEntry::Key)
                .string()
                .not_null()
                .string_len(64)
                .primary_key(),
        )
        .col(ColumnDef::new(StorageEntry::Value).text().not_null())
        .col(
            ColumnDef::new(StorageEntry::UpdatedAt)
                .big_integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(StorageEntry::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
