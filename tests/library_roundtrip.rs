use stagkitchen::library::Library;
use stagkitchen::model::{MealPlan, MealType, Recipe};
use stagkitchen::shopping::ShoppingList;
use stagkitchen::storage::{DiskStore, KeyValue, MemoryStore};

fn sample_recipe(name: &str) -> Recipe {
    Recipe {
        recipe_name: name.to_string(),
        ingredients: "2 eggs\n1 cup flour".to_string(),
        instructions: "1. Mix\n2. Bake".to_string(),
        nutritional_info: Some("Calories: 400, Protein: 12g".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_save_and_list_recipes() {
    let library = Library::new(MemoryStore::new());

    let saved = library.save_recipe(sample_recipe("Pancakes")).unwrap();
    assert!(saved.is_some());

    let recipes = library.recipes().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].recipe.recipe_name, "Pancakes");
}

#[test]
fn test_duplicate_recipe_name_is_rejected() {
    let library = Library::new(MemoryStore::new());
    library.save_recipe(sample_recipe("Pancakes")).unwrap();

    let second = library.save_recipe(sample_recipe("Pancakes")).unwrap();
    assert!(second.is_none(), "same name must not be saved twice");
    assert_eq!(library.recipes().unwrap().len(), 1);
}

#[test]
fn test_delete_recipe() {
    let library = Library::new(MemoryStore::new());
    let saved = library
        .save_recipe(sample_recipe("Pancakes"))
        .unwrap()
        .unwrap();

    assert!(library.delete_recipe(&saved.id).unwrap());
    assert!(!library.delete_recipe(&saved.id).unwrap());
    assert!(library.recipes().unwrap().is_empty());
}

#[test]
fn test_shopping_lists_append() {
    let library = Library::new(MemoryStore::new());
    let list = ShoppingList::from_ingredients("2 eggs\n1 cup flour");

    library
        .save_shopping_list(list.to_saved("Pancakes"))
        .unwrap();
    library
        .save_shopping_list(list.to_saved("Pancakes again"))
        .unwrap();

    let lists = library.shopping_lists().unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].recipe_name, "Pancakes");
    assert_eq!(lists[0].items.len(), 2);
}

#[test]
fn test_meal_plan_roundtrip_with_wire_field_names() {
    // The persisted format mirrors the generator's camelCase schema.
    let json = r#"{
        "dailyPlan": {
            "totalCalories": 2000,
            "totalProtein": 150,
            "totalCarbs": 180,
            "totalFat": 70,
            "totalFiber": 30
        },
        "meals": [{
            "name": "Oatmeal Power Bowl",
            "type": "breakfast",
            "calories": 450,
            "ingredients": "1 cup oats, 1 banana",
            "instructions": "1. Cook oats 2. Slice banana",
            "prepTime": 5,
            "cookTime": 10,
            "difficulty": "easy"
        }],
        "shoppingList": ["chia seeds"],
        "tips": ["Prep oats the night before."]
    }"#;

    let plan: MealPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.daily_plan.total_calories, 2000);
    assert_eq!(plan.meals[0].meal_type, MealType::Breakfast);

    let library = Library::new(MemoryStore::new());
    let saved = library.save_meal_plan(plan.clone()).unwrap();
    let plans = library.meal_plans().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].plan, plan);

    assert!(library.delete_meal_plan(&saved.id).unwrap());
    assert!(library.meal_plans().unwrap().is_empty());
}

#[test]
fn test_disk_store_roundtrip_and_corrupt_record() {
    let dir = tempfile::tempdir().unwrap();
    // SAFETY: this test binary is the only reader of the variable.
    unsafe {
        std::env::set_var("STAGKITCHEN_TEST_DIR", dir.path());
    }

    let store = DiskStore;
    store.set("saved_recipes_snap", &vec![sample_recipe("Toast")]).unwrap();
    let back: Vec<Recipe> = store.get("saved_recipes_snap").unwrap().unwrap();
    assert_eq!(back[0].recipe_name, "Toast");

    // Corrupt the record on disk; reads degrade to absent, not to an error.
    store.set_raw("saved_recipes_snap", "{not json").unwrap();
    let back: Option<Vec<Recipe>> = store.get("saved_recipes_snap").unwrap();
    assert!(back.is_none());

    unsafe {
        std::env::remove_var("STAGKITCHEN_TEST_DIR");
    }
}
