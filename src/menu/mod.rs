// SPDX-License-Identifier: MPL-2.0
//! Menu domain: drink records and the ordered collection they live in.

pub mod catalog;
pub mod types;

pub use catalog::Menu;
pub use types::Drink;
