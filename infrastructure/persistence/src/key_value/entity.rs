use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct KeyValueEntity {
    pub key: String,
    pub value: String,
}
