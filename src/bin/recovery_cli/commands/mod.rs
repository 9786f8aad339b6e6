// ABOUTME: Command implementations for recovery-cli
// ABOUTME: Offline analysis commands and the plan-request command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analysis;
pub mod request;
