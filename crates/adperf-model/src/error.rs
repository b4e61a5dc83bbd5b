use thiserror::Error;

/// Reasons a schema definition cannot be used for validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema '{schema}' declares no fields")]
    Empty { schema: String },
    #[error("field at position {position} has a blank name")]
    BlankFieldName { position: usize },
    #[error("field '{field}' is declared more than once")]
    DuplicateField { field: String },
    #[error("field '{field}' is text but carries a numeric constraint")]
    ConstraintOnText { field: String },
    #[error("label field '{field}' is not declared in the schema")]
    UnknownLabelField { field: String },
}
