//! Name normalization for Switch pchtxt mod archives.
//!
//! Everything here is pure: no filesystem access, no network. Given the path
//! of a content file inside an extracted archive, the crate derives a clean
//! `"<Game> - <Mod>"` pair; given the file's text, it finds the title ID.

pub mod interpret;
pub mod sanitize;
pub mod source;
pub mod title_case;
pub mod title_id;

pub use interpret::{NamePair, PathInterpreter, PathSegments, RawLabels, derive_names};
pub use sanitize::{clean_title, sanitize};
pub use source::{Source, SourceParseError};
pub use title_case::{cap_special, title_case};
pub use title_id::{
    CONTENT_EXTENSION, TitleId, find_title_id, is_content_file, version_from_file_name,
};
