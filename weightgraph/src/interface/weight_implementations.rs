use crate::interface::Weight;

macro_rules! impl_integer_weight {
    ($weight_type:ty) => {
        impl Weight for $weight_type {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn infinity() -> Self {
                Self::MAX
            }

            #[inline]
            fn saturating_weight_add(self, other: Self) -> Self {
                if self == Self::MAX || other == Self::MAX {
                    Self::MAX
                } else {
                    self.saturating_add(other)
                }
            }
        }
    };
}

macro_rules! impl_float_weight {
    ($weight_type:ty) => {
        impl Weight for $weight_type {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn infinity() -> Self {
                Self::INFINITY
            }

            #[inline]
            fn saturating_weight_add(self, other: Self) -> Self {
                self + other
            }
        }
    };
}

impl_integer_weight!(usize);
impl_integer_weight!(isize);
impl_integer_weight!(u8);
impl_integer_weight!(i8);
impl_integer_weight!(u16);
impl_integer_weight!(i16);
impl_integer_weight!(u32);
impl_integer_weight!(i32);
impl_integer_weight!(u64);
impl_integer_weight!(i64);
impl_integer_weight!(u128);
impl_integer_weight!(i128);
impl_float_weight!(f32);
impl_float_weight!(f64);
