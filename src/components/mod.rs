//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading shared state from Leptos
//! context providers.

pub mod header;
pub mod loading;
