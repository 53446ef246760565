use colfit_domain::{ColumnId, InvalidRange};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),
    #[error("Column already exists: {0}")]
    DuplicateColumn(ColumnId),
    #[error(transparent)]
    InvalidRange(#[from] InvalidRange),
}
