use recipe_book::DishRecord;
use std::collections::HashSet;

fn pelmeni() -> DishRecord {
    let mut dish = DishRecord::new();
    dish.id = 11;
    dish.name = "Pelmeni".to_string();
    dish.owner_id = 3;
    dish.cooking_instructions = "Boil for 7 minutes.".to_string();
    dish.small_photo_link = "https://photos.example.com/pelmeni/small.jpg".to_string();
    dish.big_photo_link = "https://photos.example.com/pelmeni/big.jpg".to_string();
    dish
}

#[test]
fn test_public_fields_and_accessors_agree() {
    let dish = pelmeni();

    assert_eq!(dish.id(), dish.id);
    assert_eq!(dish.name(), dish.name);
    assert_eq!(dish.owner_id(), dish.owner_id);
    assert_eq!(dish.cooking_instructions(), dish.cooking_instructions);
    assert_eq!(dish.small_photo_link(), dish.small_photo_link);
    assert_eq!(dish.big_photo_link(), dish.big_photo_link);
}

#[test]
fn test_no_field_constrains_another() {
    // Unknown owner, negative id and non-URL links are all accepted as-is.
    let mut dish = pelmeni();
    dish.set_owner_id(-999);
    dish.set_id(-1);
    dish.set_small_photo_link("not a link");
    dish.set_big_photo_link("");
    dish.set_name("");

    assert_eq!(dish.owner_id(), -999);
    assert_eq!(dish.id(), -1);
    assert_eq!(dish.small_photo_link(), "not a link");
    assert_eq!(dish.big_photo_link(), "");
    assert_eq!(dish.name(), "");
    assert_eq!(dish.cooking_instructions(), "Boil for 7 minutes.");
}

#[test]
fn test_equal_records_hash_the_same() {
    let mut set = HashSet::new();
    set.insert(pelmeni());
    set.insert(pelmeni());
    set.insert(pelmeni().with_id(12));

    assert_eq!(set.len(), 2);
}

#[test]
fn test_mutating_one_instance_leaves_other_untouched() {
    let first = pelmeni();
    let mut second = first.clone();

    second.cooking_instructions.clear();
    second.set_owner_id(4);

    assert_eq!(first.cooking_instructions(), "Boil for 7 minutes.");
    assert_eq!(first.owner_id(), 3);
    assert_ne!(first, second);
}

#[test]
fn test_json_shape_uses_snake_case_fields() {
    let value = serde_json::to_value(pelmeni()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": 11,
            "name": "Pelmeni",
            "owner_id": 3,
            "cooking_instructions": "Boil for 7 minutes.",
            "small_photo_link": "https://photos.example.com/pelmeni/small.jpg",
            "big_photo_link": "https://photos.example.com/pelmeni/big.jpg"
        })
    );
}
