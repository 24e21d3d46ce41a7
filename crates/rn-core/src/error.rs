use thiserror::Error;

pub type RnResult<T> = Result<T, RnError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RnError {
    #[error("Unknown station: {label}")]
    UnknownVertex { label: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
