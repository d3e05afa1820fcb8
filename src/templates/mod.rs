//! Component templates
//!
//! Fixed-content sources for the shared layout and the page components, and
//! the writer that puts them on disk. There is no templating engine; the
//! only parameter is the page name.

pub mod layout;
pub mod page;
pub mod writer;

pub use layout::render_layout;
pub use page::render_page;
pub use writer::{AtomicFileSink, FileSink, TemplateWriter, WrittenFile};
