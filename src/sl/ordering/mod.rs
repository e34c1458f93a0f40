//! Dedicated host ordering: package lookup, order templates, placement

pub mod api;
pub mod commands;
pub mod models;
