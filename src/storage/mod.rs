//! Filesystem layer for scaffold-pages
//!
//! - `file_io`: atomic text writes
//! - `init`: directory skeleton creation
//! - `tree`: recursive copy/remove used by backups

pub mod file_io;
pub mod init;
pub mod tree;

pub use file_io::write_text_atomic;
pub use init::{create_directories, initialize_directories};
pub use tree::{copy_tree, remove_tree, tree_stats, TreeStats};
