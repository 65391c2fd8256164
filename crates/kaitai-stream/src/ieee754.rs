//! IEEE-754 decoding from raw bit patterns.
//!
//! The stream decodes floats through these functions rather than
//! `f32::from_bits`/`f64::from_bits`, so that every backend shares one
//! arithmetic code path. The tests pin them against the native intrinsics.

/// Field layout of a binary interchange format.
struct Layout {
    exponent_bits: u32,
    mantissa_bits: u32,
}

const SINGLE: Layout = Layout {
    exponent_bits: 8,
    mantissa_bits: 23,
};

const DOUBLE: Layout = Layout {
    exponent_bits: 11,
    mantissa_bits: 52,
};

impl Layout {
    #[inline]
    const fn bias(&self) -> i32 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    /// Decode a pattern whose low `1 + exponent_bits + mantissa_bits` bits
    /// hold sign, exponent and mantissa.
    fn decode(&self, bits: u64) -> f64 {
        let width = 1 + self.exponent_bits + self.mantissa_bits;
        let negative = (bits >> (width - 1)) & 1 == 1;
        let exponent_max = (1u64 << self.exponent_bits) - 1;
        let exponent = (bits >> self.mantissa_bits) & exponent_max;
        let mantissa = bits & ((1u64 << self.mantissa_bits) - 1);

        // mantissa < 2^52, so the conversion is exact
        let fraction = mantissa as f64 / pow2(self.mantissa_bits as i32);

        let magnitude = if exponent == 0 {
            if mantissa == 0 {
                0.0
            } else {
                // subnormal: fixed minimum exponent, no implicit leading 1
                pow2(1 - self.bias()) * fraction
            }
        } else if exponent == exponent_max {
            if mantissa == 0 {
                f64::INFINITY
            } else {
                return f64::NAN;
            }
        } else {
            pow2(exponent as i32 - self.bias()) * (1.0 + fraction)
        };

        if negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Exact power of two for exponents within the normal double range.
#[inline]
fn pow2(exp: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&exp));
    2f64.powi(exp)
}

/// Decode a single-precision bit pattern.
pub fn f32_from_bits(bits: u32) -> f32 {
    // every single-precision value is exactly representable as a double
    SINGLE.decode(u64::from(bits)) as f32
}

/// Decode a double-precision bit pattern.
pub fn f64_from_bits(bits: u64) -> f64 {
    DOUBLE.decode(bits)
}
