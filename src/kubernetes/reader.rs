// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading a single artifact, where absence is an answer rather than an error

use crate::error::{FailureKind, MembershipError, Result};
use crate::kubernetes::rest;
use crate::types::ArtifactKind;
use kube::Client;
use tracing::{debug, instrument};

/// Fetch the artifact's JSON body, or `None` if the cluster does not have it.
#[instrument(skip(client))]
pub async fn read_artifact(client: &Client, kind: ArtifactKind) -> Result<Option<String>> {
    match rest::get(client, kind.path()).await {
        Ok(body) => Ok(Some(body)),
        Err(err) if is_not_found(&err) => {
            debug!("{} not present at {}", kind, kind.path());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Probe whether the artifact exists, discarding its body.
pub async fn artifact_exists(client: &Client, kind: ArtifactKind) -> Result<bool> {
    Ok(read_artifact(client, kind).await?.is_some())
}

fn is_not_found(err: &MembershipError) -> bool {
    err.failure_kind() == FailureKind::NotFound
}
