//! # reg-core
//!
//! Core entity types for Registrar.
//!
//! This crate provides the domain structs shared across all Registrar
//! crates: the three owned entities (students, courses, enrollments) and
//! the read models the enrollment registry exposes to callers (the joined
//! enrollment listing and the `{id, label}` selection options).

pub mod entities;
