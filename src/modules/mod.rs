//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients for the remote analytics backend.

pub mod supabase;
