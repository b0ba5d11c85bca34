//! Category → theming lookups.
//!
//! DESIGN
//! ======
//! Each table is an exhaustive match over `Category` plus a default arm for
//! categories the filter set does not name (and for the error joke), so a new
//! category is a one-line edit per table.

#[cfg(test)]
#[path = "category_style_test.rs"]
mod category_style_test;

use crate::net::types::{Category, Joke};

/// Visual treatment for a joke card and its history rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Gradient classes for the card background.
    pub gradient: &'static str,
    /// Reaction emoji shown under the punchline.
    pub reaction: &'static str,
}

pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle { gradient: "from-indigo-500 to-blue-600", reaction: "😂" };

pub fn style_for(category: Option<Category>) -> CategoryStyle {
    match category {
        Some(Category::Programming) => CategoryStyle { gradient: "from-blue-500 to-purple-600", reaction: "👨‍💻" },
        Some(Category::Pun) => CategoryStyle { gradient: "from-yellow-400 to-orange-500", reaction: "😏" },
        Some(Category::Dark) => CategoryStyle { gradient: "from-red-500 to-pink-600", reaction: "😈" },
        Some(Category::Spooky) => CategoryStyle { gradient: "from-purple-600 to-indigo-700", reaction: "👻" },
        Some(Category::Any) | None => DEFAULT_STYLE,
    }
}

/// Style for the category a joke reports.
pub fn joke_style(joke: &Joke) -> CategoryStyle {
    style_for(joke.category().and_then(Category::from_api_name))
}

/// Glyph shown on the category filter button.
pub fn filter_glyph(category: Category) -> &'static str {
    match category {
        Category::Any => "▦",
        Category::Programming => "</>",
        Category::Pun => "⚡",
        Category::Dark => "☠",
        Category::Spooky => "👻",
    }
}
