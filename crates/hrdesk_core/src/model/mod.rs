//! Domain model for reviews and the records they reference.
//!
//! # Responsibility
//! - Define value types mirroring one row of `departments`, `employees`
//!   and `reviews`.
//! - Own attribute validation so persistence never sees invalid values.
//!
//! # Invariants
//! - A `Review` is valid after construction and after every setter call.
//! - `id` is `None` exactly when the value is not backed by a row.

pub mod department;
pub mod employee;
pub mod review;
