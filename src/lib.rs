//! Matriz: dense matrix primitive in pure Rust.
//!
//! Matriz provides a single value type, [`Matrix`], with zero-filled
//! construction, seeded random initialization, fixed-width printing,
//! multiplication, and exact (non-tolerance) equality.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![
//!     1.0, 2.0,
//!     3.0, 4.0,
//! ]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![
//!     5.0, 6.0,
//!     7.0, 8.0,
//! ]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! let expected = Matrix::from_vec(2, 2, vec![
//!     19.0, 22.0,
//!     43.0, 50.0,
//! ]).unwrap();
//! assert_eq!(product, expected);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The core Matrix type
//! - [`error`]: Error types

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
