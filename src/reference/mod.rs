mod brackets;
mod loader;
mod table;

pub use brackets::{
    bracket_by_key, brackets_overlapping, resolve_bracket, AgeBracket, AgeCategory, Bound,
    BRACKETS,
};
pub use loader::load_reference;
pub use table::{NeedsTable, ReferenceTable, DEFAULT_REFERENCE};
