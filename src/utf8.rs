//! UTF-8 validation at the byte boundary.
//!
//! Every public operation accepts raw bytes and validates them exactly once
//! here. With the `simd` feature the check runs through `simdutf8`; otherwise
//! it falls back to the scalar `std` validator.

use crate::error::TextError;

#[cfg(feature = "simd")]
#[inline]
pub fn validate(bytes: &[u8]) -> Result<&str, TextError> {
    // `compat` keeps the error position for the message.
    simdutf8::compat::from_utf8(bytes).map_err(|e| TextError::InvalidEncoding(e.to_string()))
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn validate(bytes: &[u8]) -> Result<&str, TextError> {
    std::str::from_utf8(bytes).map_err(|e| TextError::InvalidEncoding(e.to_string()))
}
