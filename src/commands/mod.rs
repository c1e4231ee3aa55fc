//! Command implementations for the league companion CLI
//!
//! Each page has a `load_*` function returning a [`common::PageView`], a
//! `render_*` function producing text, and a `handle_*` entry point used by
//! the binary.

pub mod common;
pub mod home;
pub mod league_info;
pub mod legacy;
pub mod managers;
pub mod media;
pub mod rules;
pub mod thunderdome;

pub use common::{CommandContext, PageView};
