//! Backend API access
//!
//! HTTP client functions and response types for the CyberShield backend.

pub mod client;

pub use client::*;
