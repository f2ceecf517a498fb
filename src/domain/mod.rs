//! Domain logic modules for the clubdesk GUI.
//!
//! Schedule grouping and narrowing, kept free of UI concerns.

pub mod schedule;
