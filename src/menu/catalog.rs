// SPDX-License-Identifier: MPL-2.0
//! The menu catalog: a validated, immutable, ordered collection of drinks.
//!
//! A [`Menu`] is supplied whole at startup, either from a TOML document or
//! from the built-in house list, and is never mutated afterwards. Order is
//! significant: it defines the slider's navigation order and where the
//! wraparound boundaries fall.

use std::collections::HashSet;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;

use crate::carousel::Carousel;
use crate::error::{MenuError, Result};
use crate::menu::types::Drink;

/// Menu name used when a document does not provide one.
const DEFAULT_MENU_NAME: &str = "Cocktails";

/// Raw shape of a menu document, before validation.
#[derive(Debug, Deserialize)]
struct MenuDoc {
    name: Option<String>,
    #[serde(default)]
    drinks: Vec<Drink>,
}

/// A fixed, ordered collection of drinks with a display name.
///
/// Construction fails closed: an empty menu or one with duplicate drink ids
/// is rejected, so every `Menu` value can hand out a valid selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    name: String,
    drinks: Vec<Drink>,
}

impl Menu {
    /// Builds a menu from an already-assembled drink list.
    ///
    /// Fails with [`MenuError::Empty`] when `drinks` is empty and with
    /// [`MenuError::DuplicateId`] when two drinks share an id.
    pub fn new(name: impl Into<String>, drinks: Vec<Drink>) -> Result<Self> {
        if drinks.is_empty() {
            return Err(MenuError::Empty.into());
        }

        let mut seen = HashSet::new();
        for drink in &drinks {
            if !seen.insert(drink.id.as_str()) {
                return Err(MenuError::DuplicateId(drink.id.clone()).into());
            }
        }

        Ok(Self {
            name: name.into(),
            drinks,
        })
    }

    /// Parses a menu from a TOML document.
    ///
    /// The document carries an optional `name` and a `[[drinks]]` array;
    /// drink order in the document is preserved.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: MenuDoc =
            toml::from_str(content).map_err(|err| MenuError::Parse(err.to_string()))?;
        let name = doc.name.unwrap_or_else(|| DEFAULT_MENU_NAME.to_string());
        Self::new(name, doc.drinks)
    }

    /// Reads and parses a menu file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The menu drinks are served from when no file is supplied.
    #[must_use]
    pub fn house_menu() -> Self {
        let drinks = vec![
            Drink::new(
                "classic-mojito",
                "Classic Mojito",
                "Simple ingredients, timeless taste",
                "White rum muddled with fresh mint, lime, and cane sugar, \
                 lengthened with soda over crushed ice.",
                "drinks/classic-mojito.png",
            )
            .with_price("$12"),
            Drink::new(
                "raspberry-mojito",
                "Raspberry Mojito",
                "A tart twist on the classic",
                "Ripe raspberries pressed into the classic build, finished \
                 with a sprig of mint and a float of soda.",
                "drinks/raspberry-mojito.png",
            )
            .with_price("$13"),
            Drink::new(
                "violet-breeze",
                "Violet Breeze",
                "Floral, bright, and easy",
                "Gin and creme de violette brightened with lemon and a \
                 whisper of lavender syrup, shaken silk-smooth.",
                "drinks/violet-breeze.png",
            )
            .with_price("$14"),
            Drink::new(
                "curacao-mojito",
                "Curacao Mojito",
                "Blue skies in a glass",
                "Blue curacao folded into rum, mint, and lime for a \
                 citrus-forward pour the color of shallow surf.",
                "drinks/curacao-mojito.png",
            )
            .with_price("$13"),
        ];

        // The authored list is non-empty with unique ids, so it can skip
        // the document validation path.
        Self {
            name: "House Cocktails".to_string(),
            drinks,
        }
    }

    /// Returns the menu's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the drinks in navigation order.
    #[must_use]
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Returns the number of drinks on the menu, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    /// Returns the drink at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Drink> {
        self.drinks.get(index)
    }

    /// Returns the position of the drink with the given id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.drinks.iter().position(|drink| drink.id == id)
    }

    /// Creates a carousel over this menu, starting at `start`.
    ///
    /// `start` may be any integer and is wrapped into range. Infallible:
    /// menus are validated non-empty at construction.
    #[must_use]
    pub fn carousel(&self, start: i64) -> Carousel {
        // Menus are validated non-empty, so the fallback never applies.
        let len = NonZeroUsize::new(self.drinks.len()).unwrap_or(NonZeroUsize::MIN);
        Carousel::with_len(len, start)
    }

    /// Returns the drink at a relative offset from the slider's selection.
    ///
    /// `offset = 0` is the current drink, `-1` the previous, `+1` the next,
    /// wrapping circularly. Total for any `i64` offset.
    #[must_use]
    pub fn drink_at(&self, slider: &Carousel, offset: i64) -> &Drink {
        // A slider built by `carousel` always matches this menu's length;
        // the modulo keeps even a stale one in range.
        debug_assert_eq!(slider.len(), self.drinks.len());
        let index = slider.index_at(offset) % self.drinks.len();
        &self.drinks[index]
    }
}
