use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

/// Append-only visit log. Each record block goes out as a single
/// `write_all` under the mutex, so records from concurrent requests never
/// interleave. Uses `File` directly (the kernel buffers); every record is
/// visible in the file as soon as `append` returns.
pub struct VisitLog {
    writer: Mutex<File>,
}

impl VisitLog {
    /// Open (or create) the visit log file in append mode.
    pub fn open(path: &str) -> std::io::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(file),
        })
    }

    /// Append one rendered record block. Failures propagate to the caller;
    /// a visit that cannot be written is an operational error, not a
    /// degradable one.
    pub fn append(&self, block: &str) -> std::io::Result<()> {
        let mut f = self.writer.lock();
        f.write_all(block.as_bytes())?;
        f.flush()
    }
}
