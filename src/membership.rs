// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading, installing and deleting the membership CRD and CR of a registered cluster.
//!
//! Each operation exists twice: as a method on [`MembershipArtifacts`], bound to
//! an existing client, and as a free function that first builds the client
//! from the caller's [`Auth`]. Nothing is kept between calls; every operation
//! reads the cluster before acting on it.

use crate::config::Config;
use crate::error::{MembershipError, Result};
use crate::kubernetes::{artifact_exists, install_artifact, read_artifact, rest, Auth};
use crate::manifest::json_to_yaml;
use crate::types::ArtifactKind;
use kube::Client;
use tracing::{debug, info, instrument};

/// The exclusivity artifacts of one cluster, reached through `client`
pub struct MembershipArtifacts {
    client: Client,
    config: Config,
}

impl MembershipArtifacts {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// The live membership CR as YAML, or an empty string when there is none
    #[instrument(skip(self))]
    pub async fn get_membership_cr(&self) -> Result<String> {
        self.get_yaml(ArtifactKind::Cr).await
    }

    /// The live membership CRD as YAML, or an empty string when there is none
    #[instrument(skip(self))]
    pub async fn get_membership_crd(&self) -> Result<String> {
        self.get_yaml(ArtifactKind::Crd).await
    }

    async fn get_yaml(&self, kind: ArtifactKind) -> Result<String> {
        let Some(object) = read_artifact(&self.client, kind).await? else {
            return Ok(String::new());
        };
        json_to_yaml(object.as_bytes()).map_err(|source| MembershipError::Manifest { kind, source })
    }

    /// Install or upgrade the CRD and CR manifests. An empty manifest is skipped.
    ///
    /// The CRD goes first. A failure on the CR leaves the CRD in place.
    #[instrument(skip(self, crd_manifest, cr_manifest))]
    pub async fn install_exclusivity_manifests(
        &self,
        crd_manifest: &str,
        cr_manifest: &str,
    ) -> Result<()> {
        let manifests = [(ArtifactKind::Crd, crd_manifest), (ArtifactKind::Cr, cr_manifest)];
        for (kind, manifest) in manifests {
            if manifest.is_empty() {
                continue;
            }
            debug!("Installing {} manifest", kind);
            install_artifact(&self.client, kind, manifest, &self.config.field_manager).await?;
        }

        Ok(())
    }

    /// Delete the CRD and then the CR.
    ///
    /// Stops at the first artifact that is already gone, without looking at
    /// the ones after it.
    #[instrument(skip(self))]
    pub async fn delete_artifacts(&self) -> Result<()> {
        for kind in ArtifactKind::ALL {
            if !artifact_exists(&self.client, kind).await? {
                debug!("{} already absent, stopping", kind);
                return Ok(());
            }
            rest::delete(&self.client, kind.path()).await?;
            info!("{} deleted", kind);
        }

        Ok(())
    }
}

/// Read the membership CR with a client built from `auth`.
pub async fn get_membership_cr(auth: &Auth, config: &Config) -> Result<String> {
    connect(auth, config).await?.get_membership_cr().await
}

/// Read the membership CRD with a client built from `auth`.
pub async fn get_membership_crd(auth: &Auth, config: &Config) -> Result<String> {
    connect(auth, config).await?.get_membership_crd().await
}

/// Install or upgrade both manifests with a client built from `auth`.
pub async fn install_exclusivity_manifests(
    auth: &Auth,
    config: &Config,
    crd_manifest: &str,
    cr_manifest: &str,
) -> Result<()> {
    connect(auth, config)
        .await?
        .install_exclusivity_manifests(crd_manifest, cr_manifest)
        .await
}

/// Delete both artifacts with a client built from `auth`.
pub async fn delete_artifacts(auth: &Auth, config: &Config) -> Result<()> {
    connect(auth, config).await?.delete_artifacts().await
}

async fn connect(auth: &Auth, config: &Config) -> Result<MembershipArtifacts> {
    let client = auth.client().await?;
    Ok(MembershipArtifacts::new(client, config.clone()))
}
