use thiserror::Error;

use crate::cancel::Cancel;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cancel error: {source}")]
    Cancel {
        #[from]
        source: CancelError,
    },

    #[error("header error: {source}")]
    Header {
        #[from]
        source: HeaderError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancelError {
    #[error("operation cancelled: {reason}")]
    OperationCancelled {
        #[source]
        reason: Cancel,
    },
}

impl CancelError {
    pub fn cancelled(reason: Cancel) -> Self {
        Self::OperationCancelled { reason }
    }

    pub fn reason(&self) -> &Cancel {
        match self {
            Self::OperationCancelled { reason } => reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("invalid header name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid value for header {name:?}: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },
}

impl HeaderError {
    pub fn invalid_name<N: ToString, S: ToString>(name: N, reason: S) -> Self {
        Self::InvalidName { name: name.to_string(), reason: reason.to_string() }
    }

    pub fn invalid_value<N: ToString, S: ToString>(name: N, reason: S) -> Self {
        Self::InvalidValue { name: name.to_string(), reason: reason.to_string() }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }
}
