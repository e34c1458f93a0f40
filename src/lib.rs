//! slctl - Manage classic infrastructure dedicated hosts
//!
//! A CLI tool to list, inspect, and order dedicated hosts and their guests.
//!
//! # Features
//!
//! - List dedicated hosts with selectable, sortable columns
//! - List the guests provisioned on a host, with server-side filters
//! - Detailed host view with optional price breakdown
//! - Order new hosts (with a dry-run verification mode)
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List dedicated hosts
//! slctl host list
//!
//! # Pick and order the columns yourself
//! slctl host list --column name --column datacenter --sortby name
//!
//! # List guests on a host
//! slctl host guests 1234567 --cpu 8 --sortby memory
//!
//! # Show host details with the price breakdown
//! slctl host detail 1234567 --price --guests
//!
//! # Verify an order without placing it
//! slctl host create -H dhost01 -D example.com -d dal10 -v 1234567 --test
//! ```

pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod output;
pub mod sl;
pub mod ui;

pub use cli::{Cli, Command, HostCommand, OutputFormat};
pub use error::{Result, SlError};
pub use sl::{Credentials, CredentialsResolver, ObjectFilter, SlClient};
