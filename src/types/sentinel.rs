//! Canonical "nothing" values returned in place of a real result.
//!
//! The fail terminals on [`ErrorBuilder`](crate::ErrorBuilder) return
//! `Result<T, ErrorValue>`. When a boundary still needs the classic
//! zero/null return channel, [`SentinelResultExt`](crate::traits::SentinelResultExt)
//! collapses that result into `T::sentinel()` plus the error.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A type with a fixed failure value.
pub trait Sentinel {
    fn sentinel() -> Self;
}

impl Sentinel for bool {
    #[inline]
    fn sentinel() -> Self {
        false
    }
}

macro_rules! impl_zero_sentinel {
    ($($ty:ty),*) => {
        $(
            impl Sentinel for $ty {
                #[inline]
                fn sentinel() -> Self {
                    0
                }
            }
        )*
    };
}

impl_zero_sentinel!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Sentinel for () {
    #[inline]
    fn sentinel() -> Self {}
}

impl<T> Sentinel for Option<T> {
    #[inline]
    fn sentinel() -> Self {
        None
    }
}

impl<T> Sentinel for *mut T {
    #[inline]
    fn sentinel() -> Self {
        core::ptr::null_mut()
    }
}

impl<T> Sentinel for *const T {
    #[inline]
    fn sentinel() -> Self {
        core::ptr::null()
    }
}

/// Axis-aligned rectangle, used as the geometry failure value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// `true` when the rectangle encloses no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Sentinel for Rect {
    #[inline]
    fn sentinel() -> Self {
        Rect::ZERO
    }
}
