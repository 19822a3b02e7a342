// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field manager used for server-side apply unless configured otherwise
pub const DEFAULT_FIELD_MANAGER: &str = "terraform-provider-anthos";

/// Environment variables read by [`crate::config::Config::from_env`]
pub mod env {
    /// Any non-empty value enables debug logging
    pub const DEBUG: &str = "MEMBERSHIP_DEBUG";
    pub const FIELD_MANAGER: &str = "MEMBERSHIP_FIELD_MANAGER";
}

/// Content types sent with raw requests
pub mod content_type {
    pub const JSON: &str = "application/json";
    pub const APPLY_PATCH: &str = "application/apply-patch+yaml";
}
