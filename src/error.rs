use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Distribution error: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SpendError>;
