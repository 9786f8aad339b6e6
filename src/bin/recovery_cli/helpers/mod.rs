// ABOUTME: Helper modules for recovery-cli
// ABOUTME: JSON input and output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod json;
