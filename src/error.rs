use thiserror::Error;

pub type FilterResult<T> = Result<T, FilterError>;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid range: low={low}, high={high}")]
    InvalidRange { low: f64, high: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
