// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any specific
// business layer:
//
//   config.rs          — ServiceConfig, loaded from and saved
//                        to JSON; CLI flags override it.
//
//   frequency_store.rs — Persists n-gram frequency tables as
//                        JSON so they can be inspected or
//                        reloaded later.

/// Service configuration file handling
pub mod config;

/// N-gram table persistence
pub mod frequency_store;
