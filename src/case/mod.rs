pub mod answer;
pub mod render;
pub mod writer;

pub use answer::{AnswerSource, EmptyAnswer};
pub use render::{CaseFormat, Concatenated, FormatKind, Spaced, format_coord};
pub use writer::{CasePaths, CaseWriter};
