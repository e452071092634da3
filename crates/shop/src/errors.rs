use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
