//! Input sources: the line front end and chunked file reading.

mod line;
mod reader;

pub use line::{BufferedLineSource, LineSource, PromptLineSource};
pub use reader::{CHUNK_SIZE, read_chunked};
