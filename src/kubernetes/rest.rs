// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Raw requests against absolute API paths

use crate::constants::content_type;
use crate::error::{MembershipError, Result};
use crate::types::Operation;
use http::{header, Method, Request};
use kube::Client;
use tracing::debug;

/// GET the object at `path`, returning its JSON body.
pub async fn get(client: &Client, path: &str) -> Result<String> {
    send(client, Operation::Get, path, None, Method::GET, None, Vec::new()).await
}

/// POST a JSON body to `path`. The create endpoint does not accept YAML.
pub async fn create(client: &Client, path: &str, json: Vec<u8>) -> Result<String> {
    send(
        client,
        Operation::Create,
        path,
        None,
        Method::POST,
        Some(content_type::JSON),
        json,
    )
    .await
}

/// Server-side apply `manifest` (YAML) to the object at `path`.
pub async fn apply(
    client: &Client,
    path: &str,
    manifest: &str,
    field_manager: &str,
) -> Result<String> {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("fieldManager", field_manager)
        .finish();
    send(
        client,
        Operation::Patch,
        path,
        Some(&query),
        Method::PATCH,
        Some(content_type::APPLY_PATCH),
        manifest.as_bytes().to_vec(),
    )
    .await
}

/// DELETE the object at `path`.
pub async fn delete(client: &Client, path: &str) -> Result<String> {
    send(client, Operation::Delete, path, None, Method::DELETE, None, Vec::new()).await
}

async fn send(
    client: &Client,
    operation: Operation,
    path: &str,
    query: Option<&str>,
    method: Method,
    body_type: Option<&str>,
    body: Vec<u8>,
) -> Result<String> {
    let uri = request_uri(path, query);
    debug!("{} {}", operation, uri);

    let mut builder = Request::builder()
        .method(method)
        .uri(&uri)
        .header(header::ACCEPT, content_type::JSON);
    if let Some(body_type) = body_type {
        builder = builder.header(header::CONTENT_TYPE, body_type);
    }
    let request = builder
        .body(body)
        .map_err(|e| MembershipError::api(operation, path, kube::Error::HttpError(e)))?;

    client
        .request_text(request)
        .await
        .map_err(|e| MembershipError::api(operation, path, e))
}

/// Paths are stored without the leading slash the request line needs
fn request_uri(path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query {
        Some(query) => format!("/{}?{}", path, query),
        None => format!("/{}", path),
    }
}
