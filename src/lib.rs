// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod repo;
pub mod session;
pub mod store;
pub mod summary;
pub mod utils;
