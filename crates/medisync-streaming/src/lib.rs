//! Shell-first HTML streaming.
//!
//! - `Shell` / `HeadContent` - The page prefix flushed before any section
//! - `StreamingSink` - Writes the shell, then named sections, in order
//! - `escape_html` - Text and attribute escaping shared by renderers

mod html;
mod shell;
mod sink;

pub use html::*;
pub use shell::*;
pub use sink::*;
