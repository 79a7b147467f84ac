/// UI-free record for a single discovered file.
///
/// `rel_path` is relative to the scan root and uses forward slashes on every
/// platform, with the original case preserved. Both flags start out `true`
/// when an entry is (re)discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub rel_path: String,
    pub included: bool,
    pub visible: bool,
}

impl FileEntry {
    #[must_use]
    pub fn new(rel_path: String) -> Self {
        Self {
            rel_path,
            included: true,
            visible: true,
        }
    }
}

mod config;
mod extract;
mod lang;
mod scan;
mod select;
mod settings;

pub use config::*;
pub use extract::*;
pub use lang::*;
pub use scan::*;
pub use select::*;
pub use settings::*;
