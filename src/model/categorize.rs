// File: ./src/model/categorize.rs
// Maps an ingredient line to a grocery aisle by keyword lookup.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    #[serde(rename = "Vegetables")]
    Vegetables,
    #[serde(rename = "Fruits")]
    Fruits,
    #[serde(rename = "Grains & Bread")]
    GrainsBread,
    #[serde(rename = "Condiments & Spices")]
    CondimentsSpices,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Aisle order. Also the evaluation order of the keyword table below.
    pub const ALL: [Category; 7] = [
        Category::MeatSeafood,
        Category::DairyEggs,
        Category::Vegetables,
        Category::Fruits,
        Category::GrainsBread,
        Category::CondimentsSpices,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::MeatSeafood => "Meat & Seafood",
            Category::DairyEggs => "Dairy & Eggs",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::GrainsBread => "Grains & Bread",
            Category::CondimentsSpices => "Condiments & Spices",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The lexicon is deliberately open-ended: extend a row rather than adding
// conditionals elsewhere. Earlier rows win, so "chicken with cheese sauce"
// lands in Meat & Seafood. An unmatched item falls through to Other.
const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::MeatSeafood,
        &[
            "chicken", "beef", "pork", "fish", "meat", "salmon", "turkey", "lamb",
        ],
    ),
    (
        Category::DairyEggs,
        &["milk", "cheese", "yogurt", "butter", "cream", "egg"],
    ),
    (
        Category::Vegetables,
        &[
            "tomato", "onion", "carrot", "potato", "pepper", "lettuce", "spinach", "broccoli",
            "garlic", "ginger", "cucumber", "celery",
        ],
    ),
    (
        Category::Fruits,
        &[
            "apple", "banana", "orange", "lemon", "lime", "berry", "grape", "mango", "avocado",
        ],
    ),
    (
        Category::GrainsBread,
        &[
            "rice", "bread", "pasta", "flour", "oats", "quinoa", "noodle", "cereal",
        ],
    ),
    (
        Category::CondimentsSpices,
        &[
            "oil", "salt", "pepper", "spice", "herb", "sauce", "vinegar", "sugar", "honey",
        ],
    ),
];

/// Case-insensitive substring match against the keyword table, first row
/// that hits wins. Pure: same input, same answer.
pub fn categorize(ingredient: &str) -> Category {
    let lower = ingredient.to_lowercase();
    for (category, words) in KEYWORDS {
        if words.iter().any(|w| lower.contains(w)) {
            return *category;
        }
    }
    Category::Other
}
