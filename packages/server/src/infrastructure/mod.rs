//! Infrastructure layer: store implementations and transport DTOs.

pub mod dto;
pub mod repository;
