mod session;

pub use session::{EntryId, MenuEntry, MenuSession};
