//! Request parsing from JSON/YAML.

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::validate_request_schema;
use crate::types::GradingRequest;

/// Errors that can occur when parsing requests.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to read request file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Request validation failed: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("Request schema unavailable: {0}")]
    SchemaUnavailable(String),
}

impl GradingRequest {
    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Parse a request from an already-decoded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, RequestError> {
        validate_request_schema(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a request from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_json_value(value)
    }

    /// Parse a request from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a request from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a request file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml_file(path)
        } else {
            Self::from_json_file(path)
        }
    }

    /// Serialize the request to JSON.
    pub fn to_json(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }
}
