// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! I/O module - reading object records

mod importer;
mod records;

pub use importer::import_objects_file;
pub use records::{parse_objects, parse_record};
