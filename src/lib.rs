#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod also_source;
/// ISBD citation formatting per material layout.
pub mod citation;
pub mod classify;
pub mod config;
pub mod document;
/// Catalogue entries and field extraction (`Entry`, `EntryBuilder`)
pub mod entry;
pub mod entry_scanner;
pub mod error;
pub mod item_type;
pub mod names;
pub mod pipeline;
pub mod writers;

pub use also_source::AlsoSourceTrailer;
pub use citation::{CitationFormatter, CitationRecord, Layout, SegmentStyle, StyledSegment};
pub use classify::{Bucket, Classification, ClassifiedEntry};
pub use config::{Labels, ShelfConfig};
pub use document::{Paragraph, ParagraphSink, Run, ShelfDocument};
pub use entry::{Entry, EntryBuilder};
pub use error::{BibshelfError, Result};
pub use item_type::ItemTypeSet;
pub use pipeline::build_shelf_list;
pub use writers::{DocumentWriter, JsonWriter, OutputFormat, TextWriter, WordMlWriter};
