//! Directory listing for the folder reader.

use crate::reader::error::{ReadError, ReadResult};
use std::path::Path;

/// The immediate entries of one directory, split by type.
///
/// Holds entry names, not full paths; callers join them onto the
/// directory they listed. Symlinks and other special entries are
/// classified by what they resolve to, and anything that is neither a
/// regular file nor a directory is skipped.
#[derive(Debug, Default)]
pub struct FilesAndFolders {
    /// Names of regular files in the directory.
    pub files: Vec<String>,

    /// Names of subdirectories.
    pub folders: Vec<String>,
}

/// Lists the immediate files and subdirectories of `path`.
///
/// # Errors
///
/// Returns [`ReadError::DirectoryList`] if the directory is missing or
/// unreadable, or if any entry cannot be inspected.
pub async fn list_files_and_folders(path: &Path) -> ReadResult<FilesAndFolders> {
    let map_io = |source| ReadError::DirectoryList {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(path).await.map_err(map_io)?;
    let mut listing = FilesAndFolders::default();

    while let Some(entry) = entries.next_entry().await.map_err(map_io)? {
        // metadata() follows symlinks, so a symlinked directory recurses
        // like a real one (the depth bound catches cycles).
        let metadata = tokio::fs::metadata(entry.path()).await.map_err(map_io)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if metadata.is_dir() {
            listing.folders.push(name);
        } else if metadata.is_file() {
            listing.files.push(name);
        }
    }

    Ok(listing)
}
