use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum LocalStorage {
    Table,
    Key,
    Value,
    UpdatedAt,
}
