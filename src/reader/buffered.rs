//! Buffered body reading
//!
//! Response bodies arrive as any `Read` source and are fully materialized
//! before parsing.

use std::io::{self, Read};

/// Initial buffer size for reading a body
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Read an entire body from a Read source
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(DEFAULT_BUFFER_SIZE);
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}
