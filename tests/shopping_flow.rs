use stagkitchen::model::Category;
use stagkitchen::shopping::ShoppingList;

const INGREDIENTS: &str = "2 chicken breasts\n1 cup rice\n3 tomatoes, diced";

#[test]
fn test_end_to_end_build() {
    let list = ShoppingList::from_ingredients(INGREDIENTS);
    assert_eq!(list.total(), 3);
    assert!(list.items().iter().all(|i| !i.checked));

    let categories: Vec<Category> = list.items().iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::MeatSeafood,
            Category::GrainsBread,
            Category::Vegetables
        ]
    );
}

#[test]
fn test_headers_are_skipped() {
    let list = ShoppingList::from_ingredients("Ingredients:\n- 2 eggs\n- 1 cup flour");
    assert_eq!(list.total(), 2);
}

#[test]
fn test_counts_invariant() {
    let mut list = ShoppingList::from_ingredients(INGREDIENTS);
    let flattened: usize = list.grouped().iter().map(|(_, items)| items.len()).sum();
    assert_eq!(flattened, list.total());

    let first_id = list.items()[0].id.clone();
    list.toggle(&first_id);
    assert_eq!(list.checked_count() + list.unchecked_count(), list.total());

    let flattened: usize = list.grouped().iter().map(|(_, items)| items.len()).sum();
    assert_eq!(flattened, list.total());
}

#[test]
fn test_toggle_touches_only_the_target() {
    let mut list = ShoppingList::from_ingredients(INGREDIENTS);
    let before: Vec<_> = list.items().to_vec();
    let target = before[1].id.clone();

    assert!(list.toggle(&target));

    for (old, new) in before.iter().zip(list.items()) {
        assert_eq!(old.name, new.name);
        assert_eq!(old.category, new.category);
        if old.id == target {
            assert!(new.checked);
        } else {
            assert_eq!(old.checked, new.checked);
        }
    }
}

#[test]
fn test_toggle_unknown_id_is_a_noop() {
    let mut list = ShoppingList::from_ingredients(INGREDIENTS);
    assert!(!list.toggle("no-such-id"));
    assert_eq!(list.checked_count(), 0);
}

#[test]
fn test_grouped_follows_aisle_order() {
    let list =
        ShoppingList::from_ingredients("salt\n2 chicken breasts\nbutter\nsalmon fillet\napples");
    let groups: Vec<Category> = list.grouped().iter().map(|(c, _)| *c).collect();
    assert_eq!(
        groups,
        vec![
            Category::MeatSeafood,
            Category::DairyEggs,
            Category::Fruits,
            Category::CondimentsSpices
        ]
    );

    // Insertion order within an aisle
    let groups = list.grouped();
    let (_, meats) = &groups[0];
    assert_eq!(meats[0].name, "chicken breasts");
    assert_eq!(meats[1].name, "salmon fillet");
}

#[test]
fn test_needed_count_tracks_toggles() {
    let mut list = ShoppingList::from_ingredients("chicken\nbeef stew meat");
    assert_eq!(list.needed_count(Category::MeatSeafood), 2);

    let id = list.items()[0].id.clone();
    list.toggle(&id);
    assert_eq!(list.needed_count(Category::MeatSeafood), 1);
    assert_eq!(list.needed_count(Category::Fruits), 0);
}

#[test]
fn test_empty_text_builds_empty_list() {
    let list = ShoppingList::from_ingredients("");
    assert!(list.is_empty());
    assert!(list.grouped().is_empty());
}

#[test]
fn test_printable_filters_checked_items() {
    let mut list = ShoppingList::from_ingredients(INGREDIENTS);
    let checked_id = list.items()[0].id.clone();
    let checked_name = list.items()[0].name.clone();
    list.toggle(&checked_id);

    let doc = list.render_printable("Lemon Chicken", true);
    assert!(doc.contains("Recipe: Lemon Chicken"));
    assert!(!doc.contains(&checked_name));
    assert!(doc.contains("[ ] cup rice"));

    // With the filter off, the bought item shows up crossed
    let full = list.render_printable("Lemon Chicken", false);
    assert!(full.contains(&format!("[x] {}", checked_name)));
}

#[test]
fn test_saved_snapshot_keeps_only_unchecked() {
    let mut list = ShoppingList::from_ingredients(INGREDIENTS);
    let id = list.items()[2].id.clone();
    list.toggle(&id);

    let saved = list.to_saved("Lemon Chicken");
    assert_eq!(saved.recipe_name, "Lemon Chicken");
    assert_eq!(saved.items.len(), 2);
    assert!(saved.items.iter().all(|i| !i.checked));
}
