use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] profile_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] profile_db::DbError),

    #[error("Identity gateway error: {0}")]
    Identity(#[from] profile_identity::IdentityError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics recorder error: {message}")]
    Metrics { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
