// SPDX-License-Identifier: MPL-2.0
//! Core menu types.
//!
//! These types represent pure data without any presentation dependencies.

use std::path::PathBuf;

use serde::Deserialize;

/// One selectable entry on the menu.
///
/// Drinks are immutable once the menu is built: the collection is supplied
/// whole at startup and only ever read afterwards. The `image` field is an
/// opaque reference for whichever front-end renders the drink; this crate
/// never opens it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Drink {
    /// Stable unique identifier (a slug such as `classic-mojito`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short descriptive line shown under the name.
    pub title: String,
    /// Longer description for the detail panel.
    pub description: String,
    /// Reference to the drink's visual media.
    pub image: PathBuf,
    /// Printed price, if the menu lists one.
    #[serde(default)]
    pub price: Option<String>,
}

impl Drink {
    /// Creates a drink without a price.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
            price: None,
        }
    }

    /// Sets the printed price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_a_priceless_drink() {
        let drink = Drink::new(
            "violet-breeze",
            "Violet Breeze",
            "Floral and bright",
            "Gin with lemon and lavender.",
            "drinks/violet-breeze.png",
        );

        assert_eq!(drink.id, "violet-breeze");
        assert_eq!(drink.name, "Violet Breeze");
        assert_eq!(drink.image, PathBuf::from("drinks/violet-breeze.png"));
        assert_eq!(drink.price, None);
    }

    #[test]
    fn with_price_attaches_a_price() {
        let drink = Drink::new("a", "A", "t", "d", "a.png").with_price("$12");
        assert_eq!(drink.price.as_deref(), Some("$12"));
    }

    #[test]
    fn deserializes_from_toml_table() {
        let drink: Drink = toml::from_str(
            r#"
            id = "classic-mojito"
            name = "Classic Mojito"
            title = "Simple ingredients, timeless taste"
            description = "Rum, mint, and lime over crushed ice."
            image = "drinks/classic-mojito.png"
            price = "$12"
            "#,
        )
        .expect("valid drink table");

        assert_eq!(drink.id, "classic-mojito");
        assert_eq!(drink.price.as_deref(), Some("$12"));
    }

    #[test]
    fn price_is_optional_in_documents() {
        let drink: Drink = toml::from_str(
            r#"
            id = "violet-breeze"
            name = "Violet Breeze"
            title = "Floral and bright"
            description = "Gin with lemon and lavender."
            image = "drinks/violet-breeze.png"
            "#,
        )
        .expect("valid drink table");

        assert_eq!(drink.price, None);
    }
}
