use thiserror::Error;

/// Errors that can occur when converting an editor or custom document into a `GraphDocument`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown node type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node '{node_id}' contains an action of unknown type: '{type_name}'")]
    UnknownActionType { node_id: String, type_name: String },

    #[error("Node '{node_id}' contains a condition of unknown type: '{type_name}'")]
    UnknownConditionType { node_id: String, type_name: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while persisting or restoring a compiled script.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),
}
