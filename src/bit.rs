//! a Trait for values to be read as bits of a bitfield.
//!
//! A bool is itself, an integer is set when it is not 0.

/// returns true if the value counts as a set bit.
pub trait Bit {
    fn is_set(&self) -> bool;
}

impl Bit for bool {
    #[inline]
    fn is_set(&self) -> bool {
        *self
    }
} // end of impl Bit for bool

macro_rules! impl_bit_for_int {
    ($($t:ty),*) => {
        $(
            impl Bit for $t {
                #[inline]
                fn is_set(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_bit_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<B: Bit + ?Sized> Bit for &B {
    #[inline]
    fn is_set(&self) -> bool {
        (**self).is_set()
    }
} // end of impl Bit for &B

// end of mod tests
