//! Meal Plan Generation
//!
//! Fixed meal catalogs keyed by diet preference. One option per meal
//! category is chosen uniformly at random. The generator takes the RNG
//! as a parameter so tests can seed it.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One selected meal per category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

/// Meal options for a single diet preference
pub struct MealCatalog {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
}

pub static VEGETARIAN: MealCatalog = MealCatalog {
    breakfast: &[
        "Oatmeal with berries and nuts",
        "Greek yogurt with granola and honey",
        "Avocado toast with eggs",
    ],
    lunch: &[
        "Quinoa salad with mixed vegetables",
        "Vegetable stir-fry with tofu",
        "Lentil soup with whole grain bread",
    ],
    dinner: &[
        "Grilled vegetable pasta",
        "Chickpea curry with brown rice",
        "Stuffed bell peppers with quinoa",
    ],
    snacks: &[
        "Mixed nuts and dried fruits",
        "Hummus with vegetable sticks",
        "Fruit smoothie with protein powder",
    ],
};

pub static NON_VEGETARIAN: MealCatalog = MealCatalog {
    breakfast: &[
        "Scrambled eggs with whole grain toast",
        "Chicken and vegetable omelette",
        "Protein smoothie with banana and peanut butter",
    ],
    lunch: &[
        "Grilled chicken salad",
        "Salmon with quinoa and vegetables",
        "Turkey wrap with whole grain tortilla",
    ],
    dinner: &[
        "Grilled fish with sweet potato and greens",
        "Lean beef stir-fry with brown rice",
        "Baked chicken with roasted vegetables",
    ],
    snacks: &[
        "Greek yogurt with berries",
        "Hard-boiled eggs",
        "Protein bar",
    ],
};

pub static VEGAN: MealCatalog = MealCatalog {
    breakfast: &[
        "Smoothie bowl with plant-based protein",
        "Tofu scramble with vegetables",
        "Chia pudding with almond milk",
    ],
    lunch: &[
        "Vegan Buddha bowl",
        "Lentil and vegetable curry",
        "Vegan wrap with hummus",
    ],
    dinner: &[
        "Vegan chili with brown rice",
        "Stuffed portobello mushrooms",
        "Vegan stir-fry with tofu",
    ],
    snacks: &[
        "Roasted chickpeas",
        "Vegan protein shake",
        "Fruit and nut mix",
    ],
};

/// Look up the catalog for a diet preference
///
/// Matching is case-insensitive; unknown preferences get the
/// non-vegetarian catalog.
pub fn catalog_for(diet_preference: &str) -> &'static MealCatalog {
    match diet_preference.to_lowercase().as_str() {
        "vegetarian" => &VEGETARIAN,
        "vegan" => &VEGAN,
        _ => &NON_VEGETARIAN,
    }
}

/// Select one random meal per category for the given diet preference
pub fn generate_daily_plan(diet_preference: &str, rng: &mut impl Rng) -> DailyPlan {
    let catalog = catalog_for(diet_preference);

    DailyPlan {
        breakfast: pick(catalog.breakfast, rng),
        lunch: pick(catalog.lunch, rng),
        dinner: pick(catalog.dinner, rng),
        snacks: pick(catalog.snacks, rng),
    }
}

fn pick(options: &[&str], rng: &mut impl Rng) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_lookup() {
        assert!(std::ptr::eq(catalog_for("vegetarian"), &VEGETARIAN));
        assert!(std::ptr::eq(catalog_for("Vegan"), &VEGAN));
        assert!(std::ptr::eq(catalog_for("non-vegetarian"), &NON_VEGETARIAN));
        assert!(std::ptr::eq(catalog_for("pescatarian"), &NON_VEGETARIAN));
        assert!(std::ptr::eq(catalog_for(""), &NON_VEGETARIAN));
    }

    #[test]
    fn test_plan_draws_from_matching_catalog() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let plan = generate_daily_plan("vegan", &mut rng);
            assert!(VEGAN.breakfast.contains(&plan.breakfast.as_str()));
            assert!(VEGAN.lunch.contains(&plan.lunch.as_str()));
            assert!(VEGAN.dinner.contains(&plan.dinner.as_str()));
            assert!(VEGAN.snacks.contains(&plan.snacks.as_str()));
        }
    }

    #[test]
    fn test_unknown_preference_uses_non_vegetarian() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = generate_daily_plan("carnivore", &mut rng);
        assert!(NON_VEGETARIAN.breakfast.contains(&plan.breakfast.as_str()));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let plan_a = generate_daily_plan("vegetarian", &mut StdRng::seed_from_u64(42));
        let plan_b = generate_daily_plan("vegetarian", &mut StdRng::seed_from_u64(42));
        assert_eq!(plan_a.breakfast, plan_b.breakfast);
        assert_eq!(plan_a.lunch, plan_b.lunch);
        assert_eq!(plan_a.dinner, plan_b.dinner);
        assert_eq!(plan_a.snacks, plan_b.snacks);
    }

    #[test]
    fn test_selection_covers_all_options() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..100 {
            seen.insert(generate_daily_plan("vegetarian", &mut rng).breakfast);
        }

        assert_eq!(seen.len(), VEGETARIAN.breakfast.len());
    }
}
