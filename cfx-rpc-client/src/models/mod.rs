//! Data models used throughout the client
//!
//! This module contains the wire-level data structures and their
//! serialization/deserialization logic.

// JSON-RPC protocol data structures
pub mod jsonrpc;
