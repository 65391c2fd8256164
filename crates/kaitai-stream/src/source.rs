//! Binding streams to files and readers.
//!
//! The engine never opens paths itself; callers hand over an already open
//! [`File`] or any [`Read`] implementation.

use std::fs::File;
use std::io::Read;

use log::trace;
use memmap2::Mmap;

use crate::{KaitaiStream, Result};

impl KaitaiStream<Mmap> {
    /// Bind a stream to an open file by memory-mapping it.
    ///
    /// The file must not be truncated or modified while the stream is alive.
    pub fn from_file(file: &File) -> Result<Self> {
        // Mapping is only sound while nobody else shrinks the file.
        let mmap = unsafe { Mmap::map(file)? };
        trace!("mapped file of {} bytes", mmap.len());
        Ok(Self::new(mmap))
    }
}

impl KaitaiStream<Vec<u8>> {
    /// Bind a stream to everything a reader yields.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        trace!("buffered {} bytes from reader", data.len());
        Ok(Self::new(data))
    }
}
