// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Output formatting for disclaimer reports.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
