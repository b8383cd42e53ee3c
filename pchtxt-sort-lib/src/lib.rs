//! I/O side of pchtxt-sort: fetch mod archives, walk them, and copy every
//! content file into a clean `"<Game> - <Mod>/<version>.pchtxt"` tree.

pub mod error;
pub mod fetch;
pub mod organize;
pub mod scanner;
pub mod settings;

pub use error::SortError;
pub use organize::{
    OrganizeAction, OrganizeOptions, OrganizePlan, OrganizeProgress, OrganizeSummary,
    TitleIdOutcome, execute_organize, plan_organize,
};
pub use settings::Settings;

pub use pchtxt_sort_core::{NamePair, Source};
