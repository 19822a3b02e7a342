// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-or-apply of a single artifact

use crate::error::{MembershipError, Result};
use crate::kubernetes::{reader, rest};
use crate::manifest::yaml_to_json;
use crate::types::ArtifactKind;
use kube::Client;
use tracing::{debug, info, instrument};

/// Install `manifest` (YAML) as the given artifact: create it when the cluster
/// does not have it yet, otherwise apply it as a server-side apply patch.
#[instrument(skip(client, manifest))]
pub async fn install_artifact(
    client: &Client,
    kind: ArtifactKind,
    manifest: &str,
    field_manager: &str,
) -> Result<()> {
    let json = yaml_to_json(manifest).map_err(|source| MembershipError::Manifest { kind, source })?;

    if reader::artifact_exists(client, kind).await? {
        debug!("Updating the {} at {}", kind, kind.path());
        // Patch accepts the YAML as is
        rest::apply(client, kind.path(), manifest, field_manager).await?;
        info!("{} updated", kind);
    } else {
        debug!("Creating the {} at {}", kind, kind.create_path());
        rest::create(client, kind.create_path(), json).await?;
        info!("{} created", kind);
    }

    Ok(())
}
