//! Shared types between the frontend and any future backend.

pub mod domain;
pub mod enums;
pub mod shared;
