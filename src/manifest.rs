// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Translation between the YAML kept in provider state and the JSON the API speaks.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Converting yaml to json: {0}")]
    FromYaml(#[from] serde_yaml::Error),

    #[error("Converting json to yaml: {0}")]
    FromJson(#[from] serde_json::Error),

    #[error("Converting json to yaml: {0}")]
    ToYaml(serde_yaml::Error),
}

/// Convert a YAML manifest into JSON bytes suitable for a create request.
///
/// Only the first document is translated; anything after a `---` separator
/// is ignored. An empty manifest becomes `null`.
pub fn yaml_to_json(manifest: &str) -> Result<Vec<u8>, ManifestError> {
    let value = match serde_yaml::Deserializer::from_str(manifest).next() {
        Some(document) => serde_json::Value::deserialize(document)?,
        None => serde_json::Value::Null,
    };
    Ok(serde_json::to_vec(&value)?)
}

/// Convert a JSON object as returned by the API server into YAML text.
pub fn json_to_yaml(object: &[u8]) -> Result<String, ManifestError> {
    let value: serde_json::Value = serde_json::from_slice(object)?;
    serde_yaml::to_string(&value).map_err(ManifestError::ToYaml)
}
