//! Kaitai Struct runtime for Rust.
//!
//! This crate bundles the runtime crates that generated format parsers
//! depend on.
//!
//! # Crates
//!
//! - [`kaitai_stream`] - positioned byte/bit stream, numbers, terminators, text
//! - [`kaitai_process`] - XOR, rotation and zlib transforms
//! - [`kaitai_struct`] - field-tagged errors and validation checks
//!
//! # Example
//!
//! ```
//! use kaitai::prelude::*;
//!
//! // 4-byte magic, XOR-obfuscated zero-terminated name, 3-bit flags
//! let mut io = KaitaiStream::new(b"KSY\x01\x2b\x20\x22\x2a\x41\xa0".to_vec());
//!
//! ensure_fixed_contents(&mut io, b"KSY\x01", "/seq/0")?;
//! let raw = io.read_bytes_term(0x41, false, true, true).at("/seq/1")?.to_vec();
//! let name = process_xor_one(&raw, 0x41);
//! let flags = io.read_bits_int_be(3).at("/seq/2")?;
//!
//! assert_eq!(bytes_to_str(&name, "UTF-8").at("/seq/1")?, "jack");
//! assert_eq!(flags, 0b101);
//! # Ok::<(), kaitai::StructError>(())
//! ```

// Re-export all sub-crates
pub use kaitai_process as process;
pub use kaitai_stream as stream;
pub use kaitai_struct as structs;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use kaitai_process::{
        process_deflate_raw, process_rotate_left, process_xor_many, process_xor_one, process_zlib,
    };
    pub use kaitai_stream::{
        bytes_strip_right, bytes_terminate, bytes_terminate_multi, bytes_to_str, Endian,
        KaitaiStream,
    };
    pub use kaitai_struct::{
        decide_endian, ensure_fixed_contents, validate_any_of, validate_eq, validate_expr,
        validate_in_enum, validate_max, validate_min, validate_range, ResultExt, StructError,
    };
}

// Re-export commonly used types at the crate root
pub use kaitai_stream::KaitaiStream;
pub use kaitai_struct::StructError;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
