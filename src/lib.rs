//! Troubleshoot Flow - guided question/answer conversations
//!
//! This crate validates declarative conversation definitions and walks them
//! with a small state-transition engine: present a question, accept a
//! free-text answer, map it to the next state, repeat.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
