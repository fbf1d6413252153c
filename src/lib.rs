//! Uniplex - Single-Threaded Polling HTTP Server
//!
//! Core library for connection multiplexing and minimal HTTP handling.

pub mod config;
pub mod http;
pub mod server;
