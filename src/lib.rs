// SPDX-License-Identifier: MPL-2.0
//! `carte` is an interactive cocktail menu carousel for the terminal.
//!
//! A fixed, ordered menu of drinks is browsed through a circular slider:
//! stepping past either end wraps around, and any tab or index can be
//! jumped to directly. The navigation core is a pure value type; the
//! terminal front-end, menu documents, and session activity log are built
//! around it.

pub mod activity;
pub mod carousel;
pub mod config;
pub mod error;
pub mod menu;
pub mod ui;
