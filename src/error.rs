//! Our crate-wide error type. Only conditions the caller can do something
//! about live here: an age gate that refuses a job or spouse is not an error,
//! and neither is a refused child.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("amount is out of range")]
    AmountOutOfRange,
    #[error("One or more of the members of this family-to-be are already married!")]
    AlreadyMarried,
    #[error("error building object: {0}")]
    BuilderFailed(String),
    #[error("salary raise would exceed the maximum salary")]
    SalaryOverflow,
    #[error("salary raise would result in a negative salary")]
    SalaryUnderflow,
    #[error("no conversion rate from {0} to {1}")]
    UnsupportedCurrency(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;
