//! Math types re-exported from [`glam`].
//!
//! Widget code works in container-local coordinates with [`Vec2`]; `glam`
//! provides SIMD-accelerated implementations where the platform has them.
//!
//! # Examples
//!
//! ```
//! use nacre_core::math::Vec2;
//!
//! let position = Vec2::new(10.0, 20.0);
//! let target = Vec2::new(40.0, 20.0);
//! let halfway = position.lerp(target, 0.5);
//! assert_eq!(halfway, Vec2::new(25.0, 20.0));
//! ```
pub use glam::*;
