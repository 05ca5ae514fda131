//! EEPROM image file on the host.

use crate::domain::{MemoryRegion, SENTINEL};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// A [`MemoryRegion`] backed by a file holding a raw EEPROM image.
///
/// Useful for host-side simulation and for inspecting dumps pulled off a
/// device. Writes go straight to the file; call [`FileRegion::sync`] to
/// flush them to disk.
#[derive(Debug)]
pub struct FileRegion {
    file: File,
    len: u64,
}

impl FileRegion {
    /// Create (or truncate) an image of `len` bytes, all erased.
    pub fn create_erased<P: AsRef<Path>>(path: P, len: u32) -> io::Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&std::vec![SENTINEL; len as usize])?;
        file.flush()?;

        Ok(Self {
            file,
            len: len as u64,
        })
    }

    /// Open an existing image.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let len = file.metadata()?.len();
        Ok(Self { file, len })
    }

    /// Image size in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the image holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Flush written data to disk.
    pub fn sync(&mut self) -> io::Result<()> {
        self.file.sync_all()
    }

    fn seek_checked(&mut self, address: u16, len: usize) -> io::Result<()> {
        let end = address as u64 + len as u64;
        if end > self.len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                std::format!(
                    "access of {} bytes at 0x{:04x} exceeds image size {}",
                    len,
                    address,
                    self.len
                ),
            ));
        }
        self.file.seek(SeekFrom::Start(address as u64))?;
        Ok(())
    }
}

impl MemoryRegion for FileRegion {
    type Error = io::Error;

    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.seek_checked(address, buf.len())?;
        self.file.read_exact(buf)
    }

    fn write(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error> {
        self.seek_checked(address, data.len())?;
        self.file.write_all(data)
    }
}
