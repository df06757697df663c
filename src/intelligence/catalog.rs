// ABOUTME: Static meal catalog, meal builder ingredient catalog, and recipe lookup
// ABOUTME: Process-wide immutable reference data used by plan generation and the meal builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{MealItem, MealTime};
use serde::Serialize;

static BREAKFAST: [MealItem; 5] = [
    MealItem::new("Oatmeal with berries", 300, 12, 45, 8),
    MealItem::new("Greek yogurt with nuts", 250, 20, 15, 12),
    MealItem::new("Whole grain toast with avocado", 280, 10, 35, 14),
    MealItem::new("Scrambled eggs with vegetables", 320, 22, 8, 20),
    MealItem::new("Smoothie bowl", 290, 15, 40, 10),
];

static LUNCH: [MealItem; 5] = [
    MealItem::new("Grilled chicken salad", 400, 35, 20, 18),
    MealItem::new("Quinoa bowl with vegetables", 450, 18, 60, 12),
    MealItem::new("Salmon with sweet potato", 500, 30, 45, 22),
    MealItem::new("Lentil soup with whole grain bread", 380, 20, 55, 8),
    MealItem::new("Turkey wrap with vegetables", 420, 28, 40, 16),
];

static DINNER: [MealItem; 5] = [
    MealItem::new("Baked fish with vegetables", 450, 35, 30, 20),
    MealItem::new("Lean beef stir-fry", 480, 40, 35, 18),
    MealItem::new("Vegetable curry with brown rice", 420, 15, 65, 10),
    MealItem::new("Chicken and vegetable skewers", 460, 38, 25, 22),
    MealItem::new("Tofu stir-fry with quinoa", 440, 25, 50, 14),
];

static SNACKS: [MealItem; 4] = [
    MealItem::new("Apple with almond butter", 200, 6, 25, 10),
    MealItem::new("Mixed nuts", 180, 6, 6, 16),
    MealItem::new("Greek yogurt", 150, 15, 10, 5),
    MealItem::new("Carrot sticks with hummus", 120, 4, 15, 5),
];

/// Catalog meals for a slot
#[must_use]
pub fn meals_for(time: MealTime) -> &'static [MealItem] {
    match time {
        MealTime::Breakfast => &BREAKFAST,
        MealTime::Lunch => &LUNCH,
        MealTime::Dinner => &DINNER,
        MealTime::Snacks => &SNACKS,
    }
}

/// Meal builder ingredient groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Protein sources
    Proteins,
    /// Carbohydrate sources
    Carbs,
    /// Vegetables
    Vegetables,
    /// Fat sources
    Fats,
}

impl IngredientCategory {
    /// Every category in display order
    pub const ALL: [Self; 4] = [Self::Proteins, Self::Carbs, Self::Vegetables, Self::Fats];
}

/// One meal builder ingredient with a fixed portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ingredient {
    /// Name including the portion, e.g. "Salmon (100g)"
    pub name: &'static str,
    /// Group
    pub category: IngredientCategory,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fats_g: f64,
}

impl Ingredient {
    const fn new(
        name: &'static str,
        category: IngredientCategory,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fats_g: f64,
    ) -> Self {
        Self {
            name,
            category,
            calories,
            protein_g,
            carbs_g,
            fats_g,
        }
    }

    /// Name without the portion suffix
    #[must_use]
    pub fn base_name(&self) -> &'static str {
        self.name
            .split_once(" (")
            .map_or(self.name, |(base, _)| base)
    }
}

use IngredientCategory::{Carbs, Fats, Proteins, Vegetables};

static INGREDIENTS: [Ingredient; 29] = [
    Ingredient::new("Chicken Breast (100g)", Proteins, 165.0, 31.0, 0.0, 3.6),
    Ingredient::new("Salmon (100g)", Proteins, 208.0, 20.0, 0.0, 12.0),
    Ingredient::new("Eggs (2 large)", Proteins, 140.0, 12.0, 1.0, 10.0),
    Ingredient::new("Greek Yogurt (100g)", Proteins, 59.0, 10.0, 3.6, 0.4),
    Ingredient::new("Tofu (100g)", Proteins, 76.0, 8.0, 1.9, 4.8),
    Ingredient::new("Turkey Breast (100g)", Proteins, 135.0, 30.0, 0.0, 1.0),
    Ingredient::new("Lean Beef (100g)", Proteins, 250.0, 26.0, 0.0, 17.0),
    Ingredient::new("Tuna (100g)", Proteins, 132.0, 28.0, 0.0, 1.0),
    Ingredient::new("Brown Rice (100g cooked)", Carbs, 111.0, 2.6, 23.0, 0.9),
    Ingredient::new("Quinoa (100g cooked)", Carbs, 120.0, 4.4, 22.0, 1.9),
    Ingredient::new("Sweet Potato (100g)", Carbs, 86.0, 1.6, 20.0, 0.1),
    Ingredient::new("Oats (50g dry)", Carbs, 194.0, 6.9, 33.0, 3.6),
    Ingredient::new("Whole Wheat Bread (1 slice)", Carbs, 81.0, 4.0, 13.0, 1.2),
    Ingredient::new("Pasta (100g cooked)", Carbs, 131.0, 5.0, 25.0, 1.1),
    Ingredient::new("Banana (1 medium)", Carbs, 105.0, 1.3, 27.0, 0.4),
    Ingredient::new("Spinach (100g)", Vegetables, 23.0, 2.9, 3.6, 0.4),
    Ingredient::new("Broccoli (100g)", Vegetables, 34.0, 2.8, 7.0, 0.4),
    Ingredient::new("Carrots (100g)", Vegetables, 41.0, 0.9, 10.0, 0.2),
    Ingredient::new("Bell Peppers (100g)", Vegetables, 31.0, 1.0, 7.0, 0.3),
    Ingredient::new("Tomatoes (100g)", Vegetables, 18.0, 0.9, 3.9, 0.2),
    Ingredient::new("Cucumber (100g)", Vegetables, 16.0, 0.7, 4.0, 0.1),
    Ingredient::new("Avocado (100g)", Vegetables, 160.0, 2.0, 9.0, 15.0),
    Ingredient::new("Mushrooms (100g)", Vegetables, 22.0, 3.1, 3.3, 0.3),
    Ingredient::new("Almonds (30g)", Fats, 172.0, 6.3, 6.1, 15.0),
    Ingredient::new("Olive Oil (1 tbsp)", Fats, 119.0, 0.0, 0.0, 14.0),
    Ingredient::new("Peanut Butter (1 tbsp)", Fats, 94.0, 4.0, 3.0, 8.0),
    Ingredient::new("Walnuts (30g)", Fats, 196.0, 4.6, 4.0, 20.0),
    Ingredient::new("Chia Seeds (1 tbsp)", Fats, 60.0, 2.0, 5.0, 4.0),
    Ingredient::new("Flax Seeds (1 tbsp)", Fats, 37.0, 1.3, 2.0, 3.0),
];

/// Every ingredient in catalog order
#[must_use]
pub fn ingredients() -> &'static [Ingredient] {
    &INGREDIENTS
}

/// Ingredients of one group
pub fn ingredients_in(category: IngredientCategory) -> impl Iterator<Item = &'static Ingredient> {
    INGREDIENTS
        .iter()
        .filter(move |ingredient| ingredient.category == category)
}

/// Find an ingredient by full name or by name without the portion, ignoring case
#[must_use]
pub fn find_ingredient(name: &str) -> Option<&'static Ingredient> {
    let wanted = name.trim();
    INGREDIENTS.iter().find(|ingredient| {
        ingredient.name.eq_ignore_ascii_case(wanted)
            || ingredient.base_name().eq_ignore_ascii_case(wanted)
    })
}

/// Preparation details for a catalog meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Meal name as requested
    pub name: String,
    /// Ingredient lines
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
}

struct RecipeEntry {
    name: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

static RECIPES: [RecipeEntry; 4] = [
    RecipeEntry {
        name: "Oatmeal with berries",
        ingredients: &[
            "1 cup rolled oats",
            "1 cup water or milk",
            "1/2 cup mixed berries",
            "1 tbsp honey",
            "1/4 cup nuts",
        ],
        instructions: &[
            "Cook oats with water/milk for 5 minutes",
            "Add berries and mix well",
            "Drizzle with honey",
            "Top with nuts and serve",
        ],
    },
    RecipeEntry {
        name: "Greek yogurt with nuts",
        ingredients: &[
            "1 cup Greek yogurt",
            "1/4 cup mixed nuts",
            "1 tbsp honey",
            "Fresh fruits",
        ],
        instructions: &[
            "Scoop Greek yogurt into a bowl",
            "Add mixed nuts on top",
            "Drizzle with honey",
            "Garnish with fresh fruits",
        ],
    },
    RecipeEntry {
        name: "Grilled chicken salad",
        ingredients: &[
            "200g chicken breast",
            "Mixed greens",
            "Cherry tomatoes",
            "Cucumber",
            "Olive oil dressing",
        ],
        instructions: &[
            "Grill chicken breast until cooked",
            "Slice and place on bed of greens",
            "Add chopped vegetables",
            "Drizzle with olive oil dressing",
        ],
    },
    RecipeEntry {
        name: "Salmon with sweet potato",
        ingredients: &[
            "200g salmon fillet",
            "1 medium sweet potato",
            "Broccoli",
            "Lemon",
            "Herbs",
        ],
        instructions: &[
            "Bake sweet potato at 200°C for 45 minutes",
            "Pan-sear salmon for 4-5 minutes each side",
            "Steam broccoli",
            "Serve with lemon and herbs",
        ],
    },
];

static DEFAULT_RECIPE_INGREDIENTS: [&str; 3] =
    ["Fresh ingredients", "Herbs and spices", "Healthy oils"];

static DEFAULT_RECIPE_INSTRUCTIONS: [&str; 4] = [
    "Prepare fresh ingredients",
    "Cook using healthy methods (steaming, grilling, baking)",
    "Season with herbs and spices",
    "Serve hot and enjoy",
];

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_owned()).collect()
}

/// Recipe for a meal; meals without a dedicated recipe get generic steps
#[must_use]
pub fn recipe_for(meal_name: &str) -> Recipe {
    let (ingredients, instructions) = RECIPES
        .iter()
        .find(|entry| entry.name == meal_name)
        .map_or(
            (
                &DEFAULT_RECIPE_INGREDIENTS[..],
                &DEFAULT_RECIPE_INSTRUCTIONS[..],
            ),
            |entry| (entry.ingredients, entry.instructions),
        );
    Recipe {
        name: meal_name.to_owned(),
        ingredients: to_owned_lines(ingredients),
        instructions: to_owned_lines(instructions),
    }
}
