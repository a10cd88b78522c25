// ABOUTME: Helper modules for epa-cli
// ABOUTME: Output formatting and request input reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
