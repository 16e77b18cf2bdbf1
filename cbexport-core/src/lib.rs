//! Core utilities and types for the cbexport project generator.
//!
//! This crate provides file output and the string/path helpers shared
//! by the snapshot reader and the descriptor generator.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// List and path utilities
pub use utils::{
    expand_list, file_basename, file_extension, parent_directory, relative_path, split_path,
};
