//! Fixed-width integer and floating-point reads.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::ieee754::{f32_from_bits, f64_from_bits};
use crate::{KaitaiStream, Result};

/// Byte order of a multi-byte value.
///
/// Used by formats whose endianness is only known at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endian {
    Big,
    Little,
}

macro_rules! read_endian {
    ($(#[$doc:meta])* $name:ident, $be:ident, $le:ident, $ty:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, endian: Endian) -> Result<$ty> {
            match endian {
                Endian::Big => self.$be(),
                Endian::Little => self.$le(),
            }
        }
    };
}

impl<S: AsRef<[u8]>> KaitaiStream<S> {
    /// Read an unsigned byte.
    #[inline]
    pub fn read_u1(&mut self) -> Result<u8> {
        self.read_array::<1>().map(|b| b[0])
    }

    /// Read a signed byte.
    #[inline]
    pub fn read_s1(&mut self) -> Result<i8> {
        self.read_u1().map(|b| b as i8)
    }

    // Big-endian

    #[inline]
    pub fn read_u2be(&mut self) -> Result<u16> {
        self.read_array::<2>().map(|b| BigEndian::read_u16(&b))
    }

    #[inline]
    pub fn read_u4be(&mut self) -> Result<u32> {
        self.read_array::<4>().map(|b| BigEndian::read_u32(&b))
    }

    #[inline]
    pub fn read_u8be(&mut self) -> Result<u64> {
        self.read_array::<8>().map(|b| BigEndian::read_u64(&b))
    }

    #[inline]
    pub fn read_s2be(&mut self) -> Result<i16> {
        self.read_array::<2>().map(|b| BigEndian::read_i16(&b))
    }

    #[inline]
    pub fn read_s4be(&mut self) -> Result<i32> {
        self.read_array::<4>().map(|b| BigEndian::read_i32(&b))
    }

    #[inline]
    pub fn read_s8be(&mut self) -> Result<i64> {
        self.read_array::<8>().map(|b| BigEndian::read_i64(&b))
    }

    #[inline]
    pub fn read_f4be(&mut self) -> Result<f32> {
        self.read_u4be().map(f32_from_bits)
    }

    #[inline]
    pub fn read_f8be(&mut self) -> Result<f64> {
        self.read_u8be().map(f64_from_bits)
    }

    // Little-endian

    #[inline]
    pub fn read_u2le(&mut self) -> Result<u16> {
        self.read_array::<2>().map(|b| LittleEndian::read_u16(&b))
    }

    #[inline]
    pub fn read_u4le(&mut self) -> Result<u32> {
        self.read_array::<4>().map(|b| LittleEndian::read_u32(&b))
    }

    #[inline]
    pub fn read_u8le(&mut self) -> Result<u64> {
        self.read_array::<8>().map(|b| LittleEndian::read_u64(&b))
    }

    #[inline]
    pub fn read_s2le(&mut self) -> Result<i16> {
        self.read_array::<2>().map(|b| LittleEndian::read_i16(&b))
    }

    #[inline]
    pub fn read_s4le(&mut self) -> Result<i32> {
        self.read_array::<4>().map(|b| LittleEndian::read_i32(&b))
    }

    #[inline]
    pub fn read_s8le(&mut self) -> Result<i64> {
        self.read_array::<8>().map(|b| LittleEndian::read_i64(&b))
    }

    #[inline]
    pub fn read_f4le(&mut self) -> Result<f32> {
        self.read_u4le().map(f32_from_bits)
    }

    #[inline]
    pub fn read_f8le(&mut self) -> Result<f64> {
        self.read_u8le().map(f64_from_bits)
    }

    // Runtime-selected endianness

    read_endian!(
        /// Read a `u16` in the given byte order.
        read_u2, read_u2be, read_u2le, u16
    );
    read_endian!(
        /// Read a `u32` in the given byte order.
        read_u4, read_u4be, read_u4le, u32
    );
    read_endian!(
        /// Read a `u64` in the given byte order.
        read_u8, read_u8be, read_u8le, u64
    );
    read_endian!(read_s2, read_s2be, read_s2le, i16);
    read_endian!(read_s4, read_s4be, read_s4le, i32);
    read_endian!(read_s8, read_s8be, read_s8le, i64);
    read_endian!(read_f4, read_f4be, read_f4le, f32);
    read_endian!(read_f8, read_f8be, read_f8le, f64);
}
