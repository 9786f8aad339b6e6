// ABOUTME: JSON file and stdin readers plus pretty stdout printing for recovery-cli
// ABOUTME: Maps I/O and parse failures to invalid-input errors naming the source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io;
use std::path::Path;

use macro_recovery::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and parse a JSON document from a file, or stdin when the path is `-`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|e| AppError::invalid_input(format!("Failed to read {}: {e}", path.display())))?;

    serde_json::from_str(&raw)
        .map_err(|e| AppError::invalid_input(format!("Invalid JSON in {}: {e}", path.display())))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
