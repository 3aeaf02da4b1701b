use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentbotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("No action registered with name: {0}")]
    UnknownAction(String),

    #[error("Invalid slot value for {0}")]
    InvalidSlot(String),
}

pub type Result<T> = std::result::Result<T, RentbotError>;
