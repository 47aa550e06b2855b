use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum StorageEntry {
    Table,
    Key,
    Value,
    UpdatedAt,
}
