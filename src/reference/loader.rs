use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::reference::table::ReferenceTable;

/// Load and validate reference data from a JSON file.
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let table = ReferenceTable::from_json(&content)?;
    info!(
        path = %path.display(),
        version = table.version,
        categories = table.categories.len(),
        "loaded reference data"
    );
    Ok(table)
}
