//! Supabase (PostgREST) client
//!
//! Calls the remote SQL functions that compute region boundaries and
//! population figures, and reads census rows.

mod supabase_client;

pub use supabase_client::{SupabaseClient, UpstreamError};
