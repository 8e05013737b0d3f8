//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - grid: Image grid column/row calculations
//! - path: Breadcrumb decomposition and path truncation
//! - ui: UI timer transitions (toast dismissal, copy flag reset)

pub mod grid;
pub mod path;
pub mod ui;
