//! Unsigned limb-level arithmetic kernel.
//!
//! A magnitude is a little-endian sequence of 32-bit limbs:
//!
//! ```text
//! u = Σ u[i] × 2^(32i)
//! ```
//!
//! The routines here operate on caller-sized slices and never strip leading
//! zeros; canonical form is the signed layer's concern. Division runs on a
//! transient 16-bit half-limb form (see [`half`]) so that each quotient digit
//! comes out of a `32 ÷ 16 → (16, 16)` hardware divide.

pub mod add;
pub mod compare;
pub mod div;
pub mod half;
pub mod mul;
pub mod sub;

pub use add::add;
pub use compare::cmp_slices;
pub use div::{div_rem, long_div, short_div};
pub use half::{join, split};
pub use mul::{mul, mul_add_scalar};
pub use sub::sub;

/// Number of bits per stored limb
pub const LIMB_BITS: usize = 32;

/// Number of bits per half-limb (division working form)
pub const HALF_BITS: usize = 16;
