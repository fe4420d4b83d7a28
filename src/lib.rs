//! Tiny Blog library.
//!
//! A single-process blog: posts live in one SQLite table and every page is
//! rendered on the server with maud.

pub mod components;
pub mod config;
pub mod db;
pub mod excerpt;
pub mod web;
