use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Writes `content` to `path` atomically by writing to a temporary file
/// first, syncing to disk, then renaming into place.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;

    // Ensure data is persisted to disk before rename
    file.sync_all()?;

    // Drop file handle before rename (Windows compatibility)
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Files at or above this size are memory-mapped instead of heap-read.
const MMAP_THRESHOLD: u64 = 32 * 1024;

/// Binary detection looks at most this far into the content.
const BINARY_SNIFF_LEN: usize = 8192;

/// Returns `true` if `bytes` look like binary rather than text content.
#[must_use]
pub fn is_binary_bytes(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Reads a file as UTF-8 text, returning `None` if it does not exist, cannot
/// be read, or contains binary content.
///
/// Small files are read with a single `read` syscall. Large files are
/// memory-mapped so the OS page cache is used directly, avoiding a heap copy
/// until the content is confirmed to be text. A `None` result is the signal
/// to skip the file and continue scanning.
#[must_use]
pub fn read_text_file(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let len = file.metadata().ok()?.len();

    if len >= MMAP_THRESHOLD {
        read_large_file_mmap(&file)
    } else {
        read_small_file(&mut file, len)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "small-file path only runs below the 32 KB mmap threshold"
)]
fn read_small_file(file: &mut File, len: u64) -> Option<String> {
    let mut bytes = Vec::with_capacity(len as usize);
    file.read_to_end(&mut bytes).ok()?;
    if is_binary_bytes(&bytes) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

fn read_large_file_mmap(file: &File) -> Option<String> {
    // SAFETY: The map is read-only and dropped before this function returns.
    // Concurrent file truncation could cause SIGBUS, but this is the same
    // risk `git` and `ripgrep` accept for mmap-based file reading.
    #[expect(unsafe_code, reason = "mmap requires unsafe; lifetime is scoped to this function")]
    let mmap = unsafe { memmap2::Mmap::map(file) }.ok()?;

    if is_binary_bytes(&mmap) {
        return None;
    }

    std::str::from_utf8(&mmap).ok().map(String::from)
}
