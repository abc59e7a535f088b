// ABOUTME: Configuration management module for storage locations and pipeline settings
// ABOUTME: Re-exports the environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable configuration
pub mod environment;

pub use environment::{pipeline_from_env, AppConfig};
