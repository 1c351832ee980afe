//! `stockdesk-desktop`
//!
//! **Responsibility:** the graphical shell over the catalog domain.
//!
//! This crate provides:
//! - screen switching from a main menu
//! - add/view/update/delete/search forms
//! - modal success/error/confirmation dialogs
//!
//! The shell is a **thin layer** over `stockdesk-catalog`: every mutation
//! goes through the catalog's interface, and every domain failure is
//! recovered here and surfaced as dialog text.

pub mod app;
pub mod dialog;
pub mod forms;
pub mod theme;

pub use app::{Screen, StockdeskApp};
