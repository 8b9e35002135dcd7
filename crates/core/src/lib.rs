//! Core business logic for Centime.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Domain types for the personal ledger
//! - `validation` - Ordered rule chain gating transaction writes
//! - `snapshot` - Derived financial state aggregation
//! - `forecast` - Month-end balance projection
//! - `progression` - Experience, tier, and achievement computation
//! - `store` - Read-only collaborator contract for the ledger store
//! - `service` - Snapshot orchestration over a ledger store

pub mod forecast;
pub mod ledger;
pub mod progression;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod validation;
