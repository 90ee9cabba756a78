//! Plume Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Plume parser and
//! renderer. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke, text and render-layer definitions ([`draw`] module)
//! - **Semantic**: The per-kind diagram model produced by the parser ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
