// Copyright (c) 2025 - Cowboy AI, Inc.
//! Model railway catalog domain
//!
//! This crate provides the domain model for a model railway catalog: the
//! TRN structured identifier scheme with its slug and epoch primitives,
//! the catalog entities built on top of it, and a command layer talking
//! to storage through repository abstractions.

pub mod commands;
pub mod domain;
pub mod errors;
pub mod repository;

// Re-export commonly used types
pub use domain::{
    Brand, BrandId, CatalogItem, CatalogItemId, Epoch, Railway, RailwayId, Scale, ScaleId, Slug,
    Trn,
};
pub use errors::{CatalogError, CatalogResult};
