//! Remote DDL execution adapters.

mod supabase;

pub use supabase::{SUPABASE_KEY_VAR, SUPABASE_URL_VAR, SupabaseDdlExecutor};
