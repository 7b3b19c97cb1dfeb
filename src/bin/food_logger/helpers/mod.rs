// ABOUTME: Helper modules for the food-logger CLI
// ABOUTME: Terminal rendering of session views and command parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod commands;
pub mod display;
