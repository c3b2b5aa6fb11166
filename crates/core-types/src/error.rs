use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid USD price '{0}': {1}")]
    InvalidUsdPrice(String, rust_decimal::Error),
}
