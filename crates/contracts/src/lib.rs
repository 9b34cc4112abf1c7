//! Shared contract between the docstring-generator UI and the external
//! generation service.

pub mod enums;
pub mod generation;
