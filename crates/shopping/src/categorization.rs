use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Grocery store aisle
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Bakery,
    #[default]
    #[serde(other)]
    Other,
}

const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Produce,
        &[
            "tomato", "onion", "garlic", "lettuce", "carrot", "celery", "bell pepper",
            "cucumber", "zucchini", "broccoli", "cauliflower", "spinach", "kale", "cabbage",
            "potato", "sweet potato", "mushroom", "green bean", "pea", "corn", "avocado",
            "eggplant", "squash", "jalapeno", "jalapeño", "ginger", "cilantro", "parsley",
            "basil", "mint", "thyme", "rosemary", "apple", "banana", "orange", "lemon",
            "lime", "strawberry", "blueberry", "raspberry", "berry", "grape", "mango",
            "pineapple", "watermelon", "spring onion", "shallot",
        ],
    ),
    (
        Category::Dairy,
        &[
            "milk", "cream", "heavy cream", "sour cream", "butter", "cheese", "cheddar",
            "mozzarella", "parmesan", "feta", "cream cheese", "yogurt", "greek yogurt",
            "egg",
        ],
    ),
    (
        Category::Meat,
        &[
            "chicken", "chicken breast", "chicken thigh", "turkey", "duck", "beef",
            "ground beef", "steak", "pork", "bacon", "ham", "sausage", "fish", "salmon",
            "tuna", "cod", "shrimp", "prawn", "lamb",
        ],
    ),
    (
        Category::Pantry,
        &[
            "flour", "rice", "pasta", "spaghetti", "noodle", "oat", "quinoa", "sugar",
            "brown sugar", "baking powder", "baking soda", "yeast", "oil", "olive oil",
            "vinegar", "soy sauce", "ketchup", "mustard", "mayonnaise", "honey", "salt",
            "pepper", "black pepper", "paprika", "cumin", "cinnamon", "oregano",
            "chili powder", "garlic powder", "tomato paste", "tomato sauce", "canned tomato",
            "broth", "chicken broth", "stock", "bean", "chickpea", "lentil",
            "peanut butter", "almond", "walnut",
        ],
    ),
    (Category::Frozen, &["ice cream", "frozen vegetable"]),
    (
        Category::Bakery,
        &["bread", "baguette", "tortilla", "bagel", "bun", "croissant", "pita"],
    ),
];

/// Maps free-text ingredient names to grocery categories with a keyword table.
pub struct CategorizationService;

impl CategorizationService {
    /// Exact matches win; otherwise the longest trailing phrase that matches
    /// decides, so "red bell pepper" is produce and "whole milk" is dairy.
    pub fn categorize(ingredient_name: &str) -> Category {
        let normalized = ingredient_name.trim().to_lowercase();
        if normalized.starts_with("frozen ") {
            return Category::Frozen;
        }

        let words = normalized.split_whitespace().collect::<Vec<_>>();
        for start in 0..words.len() {
            let phrase = words[start..].join(" ");
            if let Some(category) = Self::lookup(&phrase) {
                return category;
            }
        }

        Category::Other
    }

    fn lookup(phrase: &str) -> Option<Category> {
        Self::singular_forms(phrase).into_iter().find_map(|form| {
            KEYWORDS
                .iter()
                .find(|(_, words)| words.contains(&form.as_str()))
                .map(|(category, _)| *category)
        })
    }

    fn singular_forms(phrase: &str) -> Vec<String> {
        let mut forms = vec![phrase.to_owned()];
        if let Some(stem) = phrase.strip_suffix("ies") {
            forms.push(format!("{stem}y"));
        }
        if let Some(stem) = phrase.strip_suffix("es") {
            forms.push(stem.to_owned());
        }
        if let Some(stem) = phrase.strip_suffix('s') {
            forms.push(stem.to_owned());
        }
        forms
    }
}
