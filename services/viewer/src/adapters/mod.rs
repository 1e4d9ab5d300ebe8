pub mod fs_source;
pub mod tracing_sink;

pub use fs_source::FsTranscriptSource;
pub use tracing_sink::TracingSink;
