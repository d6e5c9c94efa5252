// SPDX-License-Identifier: MPL-2.0
//! Shared UI infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering (visual primitives)

pub mod design_tokens;
pub mod icons;
