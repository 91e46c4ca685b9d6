// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use std::path::PathBuf;

/// Errors that stop a command before any board is checked.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid clock overrides in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Board {} has no configurable clock tree.", .0)]
    NoClockTree(&'static str),
}
