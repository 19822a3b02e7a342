// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from the credentials handed over by the caller

use crate::error::{MembershipError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Credentials used to reach the registered cluster
#[derive(Clone, Debug, Default)]
pub enum Auth {
    /// Infer from the environment: `KUBECONFIG`, `~/.kube/config` or the in-cluster service account
    #[default]
    Infer,
    /// An inline kubeconfig document, optionally pinned to one of its contexts
    Kubeconfig {
        content: String,
        context: Option<String>,
    },
}

impl Auth {
    /// Build a ready to use client. No request is sent to the cluster.
    #[instrument(skip(self))]
    pub async fn client(&self) -> Result<Client> {
        match self {
            Auth::Infer => create_inferred_client().await,
            Auth::Kubeconfig { content, context } => {
                create_client_from_kubeconfig(content, context.as_deref()).await
            }
        }
    }
}

async fn create_inferred_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| MembershipError::ClientInit(format!("Failed to infer config: {}", e)))?;
    debug!("Using inferred cluster {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| MembershipError::ClientInit(format!("Failed to create client: {}", e)))
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| MembershipError::ClientInit(format!("Failed to parse kubeconfig: {}", e)))?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };
    let client_config = KConfig::from_custom_kubeconfig(kubeconfig_parsed, &options)
        .await
        .map_err(|e| MembershipError::ClientInit(format!("Failed to create config: {}", e)))?;
    debug!("Using kubeconfig cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| MembershipError::ClientInit(format!("Failed to create client: {}", e)))
}
