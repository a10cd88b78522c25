// ABOUTME: Re-exports command modules for epa-cli
// ABOUTME: Provides the evaluate, limits, and authz subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod authz;
pub mod evaluate;
pub mod limits;
