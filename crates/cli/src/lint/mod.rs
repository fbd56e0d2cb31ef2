// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Companion lint entry points.

pub mod python;
pub mod shell;
