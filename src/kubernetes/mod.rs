// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes plumbing: client creation, raw REST requests, and reading and installing artifacts.

pub mod client;
pub mod installer;
pub mod reader;
pub mod rest;

pub use client::Auth;
pub use installer::install_artifact;
pub use reader::{artifact_exists, read_artifact};
