//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep UI/backend adapters decoupled from collection and scoring details.

pub mod estimate_service;
