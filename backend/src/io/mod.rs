//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic. Handlers
//! translate JSON requests into domain queries and commands, and domain
//! results and errors back into JSON responses.
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum
//! - **Serialization**: Serde DTOs from the `shared` crate
//! - **State Management**: Axum `State` extractor carrying [`crate::AppState`]

pub mod rest;
