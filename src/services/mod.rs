// src/services/mod.rs

//! Service layer for talking to the forum REST API.

mod client;

pub use client::ForumClient;
