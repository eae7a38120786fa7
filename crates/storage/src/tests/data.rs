use groceries_domain as domain;

pub static ITEMS: std::sync::LazyLock<Vec<domain::Item>> =
    std::sync::LazyLock::new(|| vec![ITEM.clone(), ITEM_2.clone()]);

pub static ITEM: std::sync::LazyLock<domain::Item> = std::sync::LazyLock::new(|| domain::Item {
    id: 1.into(),
    name: "Milk".to_string(),
    quantity: "2".to_string(),
    is_editing: false,
});

pub static ITEM_2: std::sync::LazyLock<domain::Item> = std::sync::LazyLock::new(|| domain::Item {
    id: 2.into(),
    name: "Bread".to_string(),
    quantity: "1 loaf".to_string(),
    is_editing: true,
});
