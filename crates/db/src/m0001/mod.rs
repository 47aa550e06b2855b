mod storage_entry;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealdeck",
    "m0001",
    vec_box![],
    vec_box![storage_entry::CreateTable]
);
