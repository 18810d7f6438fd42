//! Infrastructure layer for Listy.
//!
//! This crate provides concrete implementations of the ports defined in
//! the workflow layer: todo stores backed by memory, a JSON file or a
//! Supabase (PostgREST) table, and the OpenAI task-breakdown client.

pub mod adapters;
pub mod config;
pub mod errors;
pub mod factory;

pub use config::{ConfigurationError, OpenAiConfig, StorageMode, StoreConfig, SupabaseConfig};
pub use errors::InfraError;
pub use factory::{FactoryError, StoreFactory};
