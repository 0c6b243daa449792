//! Leaf-level output elements.
//!
//! # Responsibility
//! - Provide the smallest renderable building blocks: text, icon, action, link.
//! - Keep markup decisions in the renderer; atoms only carry data and attributes.
//!
//! # Invariants
//! - Every atom reports `ElementLevel::Atom`.

pub mod action;
pub mod icon;
pub mod link;
pub mod text;

use crate::element::Element;

/// Marker for leaf elements.
pub trait Atom: Element {}
