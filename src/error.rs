// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::manifest::ManifestError;
use crate::types::{ArtifactKind, Operation};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MembershipError {
    #[error("Initializing Kubernetes client: {0}")]
    ClientInit(String),

    #[error("Translating {kind} manifest: {source}")]
    Manifest {
        kind: ArtifactKind,
        #[source]
        source: ManifestError,
    },

    #[error("{operation} {path}: {source}")]
    Api {
        operation: Operation,
        path: String,
        #[source]
        source: kube::Error,
    },
}

impl MembershipError {
    pub(crate) fn api(operation: Operation, path: &str, source: kube::Error) -> Self {
        MembershipError::Api {
            operation,
            path: path.to_string(),
            source,
        }
    }

    /// Classify this error for callers deciding whether to try again.
    /// Only API failures can be transient.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            MembershipError::Api { source, .. } => FailureKind::classify(source),
            _ => FailureKind::Fatal,
        }
    }
}

/// Coarse classification of a failed API request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The addressed resource (or its kind) does not exist
    NotFound,
    /// Throttling, server side or connection level failures
    Transient,
    Fatal,
}

impl FailureKind {
    /// Derive the classification from the structured status the API returned.
    pub fn classify(err: &kube::Error) -> Self {
        match err {
            kube::Error::Api(status) if status.code == 404 || status.reason == "NotFound" => {
                FailureKind::NotFound
            }
            kube::Error::Api(status) if status.code == 429 || status.code >= 500 => {
                FailureKind::Transient
            }
            kube::Error::Api(_) => FailureKind::Fatal,
            kube::Error::HyperError(_) | kube::Error::Service(_) | kube::Error::ReadEvents(_) => {
                FailureKind::Transient
            }
            _ => FailureKind::Fatal,
        }
    }
}

pub type Result<T> = std::result::Result<T, MembershipError>;
