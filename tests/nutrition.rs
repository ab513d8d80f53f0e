use stagkitchen::model::Recipe;
use stagkitchen::model::nutrition::extract;

#[test]
fn test_partial_match() {
    let summary = extract("Calories: 350, Protein: 20g").unwrap();
    assert_eq!(summary.calories.as_deref(), Some("350"));
    assert_eq!(summary.protein.as_deref(), Some("20g"));
    assert_eq!(summary.carbs, None);
    assert_eq!(summary.fat, None);
    assert_eq!(summary.fiber, None);
}

#[test]
fn test_all_fields() {
    let text = "Calories: 520 kcal, Protein: 32g, Carbohydrates: 45g, Fat: 18g, Fiber: 6g";
    let summary = extract(text).unwrap();
    assert_eq!(summary.calories.as_deref(), Some("520"));
    assert_eq!(summary.protein.as_deref(), Some("32g"));
    assert_eq!(summary.carbs.as_deref(), Some("45g"));
    assert_eq!(summary.fat.as_deref(), Some("18g"));
    assert_eq!(summary.fiber.as_deref(), Some("6g"));
}

#[test]
fn test_empty_input_is_none() {
    assert_eq!(extract(""), None);
    assert_eq!(extract("   "), None);
}

#[test]
fn test_no_recognizable_fields_is_none() {
    assert_eq!(extract("A delicious and healthy dinner."), None);
}

#[test]
fn test_markdown_bold_and_ragged_spacing() {
    let summary = extract("**Protein:**   25g\n**Fat:** 9g").unwrap();
    assert_eq!(summary.protein.as_deref(), Some("25g"));
    assert_eq!(summary.fat.as_deref(), Some("9g"));
}

#[test]
fn test_numeric_ranges() {
    let summary = extract("Calories: 250-300 per serving, Protein 18-22g").unwrap();
    assert_eq!(summary.calories.as_deref(), Some("250-300"));
    assert_eq!(summary.protein.as_deref(), Some("18-22g"));
}

#[test]
fn test_calories_value_before_unit() {
    let summary = extract("Roughly 480 kcal with plenty of greens").unwrap();
    assert_eq!(summary.calories.as_deref(), Some("480"));

    let summary = extract("About 350 calories per serving").unwrap();
    assert_eq!(summary.calories.as_deref(), Some("350"));
}

#[test]
fn test_british_fibre_spelling() {
    let summary = extract("Fibre: 4g").unwrap();
    assert_eq!(summary.fiber.as_deref(), Some("4g"));
}

#[test]
fn test_recipe_accessor_uses_nutritional_info() {
    let recipe = Recipe {
        recipe_name: "Test".to_string(),
        ingredients: String::new(),
        instructions: String::new(),
        nutritional_info: Some("Calories: 400".to_string()),
        ..Default::default()
    };
    let summary = recipe.nutrition().unwrap();
    assert_eq!(summary.calories.as_deref(), Some("400"));

    let bare = Recipe::default();
    assert!(bare.nutrition().is_none());
}
