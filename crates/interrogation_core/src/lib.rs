pub mod domain;
pub mod grammar;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod speaker;
pub mod transcript;
pub mod view_state;

pub use domain::{
    ActionCategory, Group, LineOutcome, MembershipTag, ParsedLine, RecordBody, RenderRecord,
    UnparsedLine,
};
pub use grammar::parse_line;
pub use pipeline::render_records;
pub use ports::{Diagnostic, DiagnosticSink, LoadError, LoadResult, NullSink, TranscriptSource};
pub use session::{Mutation, ViewerSession};
pub use speaker::{bare_name, extract_speaker, SpeakerMatch, Tone};
pub use transcript::{SpeakerCount, Transcript};
pub use view_state::{CategoryKey, SortOrder, ViewError, ViewState};
