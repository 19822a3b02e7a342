// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The membership artifacts and the API paths they live at.

use std::fmt;

/// Absolute API paths of the membership artifacts
pub mod paths {
    /// The membership CRD, used for get, patch and delete
    pub const CRD: &str =
        "apis/apiextensions.k8s.io/v1beta1/customresourcedefinitions/memberships.hub.gke.io";
    /// CRDs are created by posting to the collection, not the named resource
    pub const CRD_COLLECTION: &str = "apis/apiextensions.k8s.io/v1beta1/customresourcedefinitions";
    /// The membership CR, used for every operation
    pub const CR: &str = "apis/hub.gke.io/v1/memberships/membership";
}

/// One of the two exclusivity artifacts managed in a registered cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Crd,
    Cr,
}

impl ArtifactKind {
    /// Order in which artifacts are installed and deleted
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Crd, ArtifactKind::Cr];

    /// Path of the named resource, used to get, patch and delete it
    pub fn path(self) -> &'static str {
        match self {
            ArtifactKind::Crd => paths::CRD,
            ArtifactKind::Cr => paths::CR,
        }
    }

    /// Path a create request must be sent to
    pub fn create_path(self) -> &'static str {
        match self {
            ArtifactKind::Crd => paths::CRD_COLLECTION,
            ArtifactKind::Cr => paths::CR,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Crd => f.write_str("CRD"),
            ArtifactKind::Cr => f.write_str("CR"),
        }
    }
}

/// Request made against the API server, used to label failures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Patch,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Get => "GET",
            Operation::Create => "CREATE",
            Operation::Patch => "PATCH",
            Operation::Delete => "DELETE",
        };
        f.write_str(name)
    }
}
