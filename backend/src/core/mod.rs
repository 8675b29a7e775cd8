//! Core primitives shared by generation and update

pub mod time;
