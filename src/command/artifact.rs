use super::{Command, to_json_array};
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A named, compiled command list ready to be spliced into an event page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompiledScript {
    pub name: String,
    pub commands: Vec<Command>,
}

impl CompiledScript {
    pub fn new(name: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }

    /// The command list in the engine's JSON layout.
    pub fn to_json(&self) -> serde_json::Value {
        to_json_array(&self.commands)
    }

    pub fn to_json_string(&self) -> Result<String, ArtifactError> {
        serde_json::to_string_pretty(&self.to_json())
            .map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Encodes the compiled script with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Saves the compiled script to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| io_error(path, e))?;
        file.write_all(&bytes).map_err(|e| io_error(path, e))?;
        tracing::debug!(path, bytes = bytes.len(), "saved compiled script");
        Ok(())
    }

    /// Loads a compiled script from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| io_error(path, e))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| io_error(path, e))?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled script from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(script, _)| script) // bincode 2 returns (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}

fn io_error(path: &str, e: std::io::Error) -> ArtifactError {
    ArtifactError::Io {
        path: path.to_string(),
        message: e.to_string(),
    }
}
