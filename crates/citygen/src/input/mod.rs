//! Input reading and source metadata.

mod parser;
mod source;

pub use parser::{parse_delimiter, Parser, ParserConfig};
pub use source::{RawTable, SourceMetadata};
