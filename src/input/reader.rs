use std::io::{self, ErrorKind, Read};

/// Size of each read issued while loading a file for translation.
pub const CHUNK_SIZE: usize = 8192;

/// Reads everything from `reader` in fixed-size chunks.
///
/// A read that fills less than a whole chunk is taken as the end of input.
/// Interrupted reads are retried; any other error is returned as-is.
pub fn read_chunked<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = match reader.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if bytes_read < CHUNK_SIZE {
            return Ok(buffer);
        }
    }
}
