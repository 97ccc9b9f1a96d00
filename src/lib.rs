//! Docsite GUI Library
//!
//! This crate provides the main application logic for Docsite GUI, a
//! native viewer for a small bilingual documentation site. Pages are
//! addressed by URL-style routes whose leading segment carries the
//! locale; a header control switches the active language by rewriting
//! that segment.

pub mod app;
pub mod components;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod state;
pub mod theme;
