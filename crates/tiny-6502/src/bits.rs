//! Bit manipulation over fixed-width unsigned integers.
//!
//! Every operation checks the bit position against the integer's declared
//! width before shifting, so an out-of-range position is an
//! [`Error::InvalidBitPosition`] rather than a shift overflow.
//!
//! ```text
//!     01111000    set bit 2      01111111    clear bit 4
//!   | 00000100                 & 11101111
//!     --------                   --------
//!     01111100                   01101111
//! ```

use std::ops::{BitAnd, BitOr, Not};

use crate::{Error, Result};

/// An unsigned integer treated as an indexed vector of bits.
pub trait BitField:
    Copy + Eq + BitOr<Output = Self> + BitAnd<Output = Self> + Not<Output = Self>
{
    /// Number of addressable bits.
    const WIDTH: u32;

    /// All bits clear.
    const ZERO: Self;

    /// A value with only bit `pos` set. `pos` must be below `WIDTH`.
    fn bit_mask(pos: u32) -> Self;
}

macro_rules! impl_bit_field {
    ($($t:ty),*) => {
        $(
            impl BitField for $t {
                const WIDTH: u32 = <$t>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn bit_mask(pos: u32) -> Self {
                    debug_assert!(pos < Self::WIDTH);
                    1 << pos
                }
            }
        )*
    };
}

impl_bit_field!(u8, u16, u32);

/// Check that `pos` addresses a bit of `T`.
pub fn check_position<T: BitField>(pos: u32) -> Result<()> {
    if pos < T::WIDTH {
        Ok(())
    } else {
        Err(Error::InvalidBitPosition {
            position: pos,
            width: T::WIDTH,
        })
    }
}

/// Return `value` with bit `pos` forced to 1.
pub fn set_bit<T: BitField>(value: T, pos: u32) -> Result<T> {
    check_position::<T>(pos)?;
    Ok(value | T::bit_mask(pos))
}

/// Return `value` with bit `pos` forced to 0.
pub fn clear_bit<T: BitField>(value: T, pos: u32) -> Result<T> {
    check_position::<T>(pos)?;
    Ok(value & !T::bit_mask(pos))
}

/// Set or clear bit `pos` depending on `on`.
pub fn set_bit_to<T: BitField>(value: T, pos: u32, on: bool) -> Result<T> {
    if on {
        set_bit(value, pos)
    } else {
        clear_bit(value, pos)
    }
}

/// Whether bit `pos` of `value` is 1.
pub fn is_bit_set<T: BitField>(value: T, pos: u32) -> Result<bool> {
    check_position::<T>(pos)?;
    Ok(value & T::bit_mask(pos) != T::ZERO)
}
