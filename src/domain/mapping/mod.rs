//! Mapping table parsing (`ID_Name` lines).

mod table;

pub use table::{SkipReason, SkippedLine, TermEntry, TermTable};
