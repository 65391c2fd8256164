//! Decompression of zlib-framed and raw DEFLATE data.

use flate2::{Decompress, FlushDecompress, Status};
use log::debug;

use crate::{Error, Result};

/// Decompress a zlib stream (RFC 1950 header, DEFLATE body, Adler-32).
pub fn process_zlib(data: &[u8]) -> Result<Vec<u8>> {
    inflate(data, true)
}

/// Decompress a raw DEFLATE stream without any framing.
pub fn process_deflate_raw(data: &[u8]) -> Result<Vec<u8>> {
    inflate(data, false)
}

/// Run the inflater to the end of the stream.
///
/// Input that runs out before the final block is an error rather than a
/// silently short result.
fn inflate(data: &[u8], zlib_header: bool) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(zlib_header);
    let mut output = Vec::with_capacity(data.len().saturating_mul(2).max(64));

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.capacity());
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status = inflater
            .decompress_vec(&data[consumed..], &mut output, FlushDecompress::None)
            .map_err(|e| decompression_error(e.to_string()))?;

        if status == Status::StreamEnd {
            return Ok(output);
        }
        // output had spare room, so no progress means the input ran dry
        if inflater.total_in() as usize == consumed && inflater.total_out() == produced {
            return Err(decompression_error(
                "unexpected end of compressed data".to_string(),
            ));
        }
    }
}

fn decompression_error(detail: String) -> Error {
    debug!("inflate failed: {detail}");
    Error::Decompression(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::{DeflateEncoder, ZlibEncoder};
    use flate2::Compression;
    use std::io::Write;

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn patterned(len: usize) -> Vec<u8> {
        (0..len as u32).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_zlib_roundtrip() {
        let original = b"Compress me";
        assert_eq!(process_zlib(&zlib(original)).unwrap(), original);
    }

    #[test]
    fn test_deflate_raw_roundtrip() {
        let original = b"Hello, World! This is a test of DEFLATE compression.";
        assert_eq!(process_deflate_raw(&deflate(original)).unwrap(), original);
    }

    #[test]
    fn test_output_larger_than_initial_buffer() {
        for len in [65, 100, 1000] {
            let original = vec![0u8; len];
            assert_eq!(process_zlib(&zlib(&original)).unwrap(), original);
            assert_eq!(process_deflate_raw(&deflate(&original)).unwrap(), original);
        }
    }

    #[test]
    fn test_large_patterned_output() {
        let original = patterned(100_000);
        assert_eq!(process_zlib(&zlib(&original)).unwrap(), original);
        assert_eq!(process_deflate_raw(&deflate(&original)).unwrap(), original);
    }

    #[test]
    fn test_zlib_malformed() {
        // bad CMF/FLG header check
        let err = process_zlib(&[0x78, 0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, Error::Decompression(_)));
    }

    #[test]
    fn test_truncated_stream() {
        let original = patterned(100_000);

        let compressed = zlib(&original);
        let err = process_zlib(&compressed[..compressed.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::Decompression(_)));

        let compressed = deflate(&original);
        assert!(process_deflate_raw(&compressed[..compressed.len() - 1]).is_err());

        assert!(process_zlib(&[]).is_err());
    }
}
