//! Custom painting for the clubdesk GUI.

pub mod avatar;
