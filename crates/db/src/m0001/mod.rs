mod local_storage;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealsu",
    "m0001",
    vec_box![],
    vec_box![local_storage::CreateTable]
);
