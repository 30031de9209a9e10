#![deny(unreachable_pub)]

pub use self::pos::{BytePos, Span, DUMMY_SP};
pub use self::source_map::{FileName, SourceFile, SourceMap};

mod pos;
mod source_map;
pub mod sync;
