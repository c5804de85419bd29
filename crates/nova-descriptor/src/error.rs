use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Neither the method nor its owner declares the type variable and the
    /// strict policy is in effect.
    #[error("no generic bound found for type variable `{name}`")]
    MissingGenericBound { name: String },
    #[error("invalid descriptor config: {0}")]
    InvalidConfig(String),
}
