//! Platform-agnostic page logic: topic catalog, submit validation and view state.

pub mod catalog;
pub mod selection;
pub mod validation;
