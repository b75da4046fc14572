//! Vellum Core Types and Definitions
//!
//! This crate provides the foundational types for Vellum's in-memory
//! representation of SVG documents. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Elements**: Typed graphic elements and their kinds ([`element`] module)
//! - **Document**: The arena-backed element tree ([`document`] module)
//! - **Policy**: Knobs that control how unsupported markup is handled ([`policy`] module)

pub mod document;
pub mod element;
pub mod geometry;
pub mod policy;
