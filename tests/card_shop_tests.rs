use std::io::Write;

use card_shop::sort::{ascending, descending};
use card_shop::{CardShop, SortKey, YGOCard};

const STOCK: &str = "\
name,type,level_rank,race,attribute,atk,def
Blue-Eyes White Dragon,Monster,8,Dragon,Light,3000,2500
Dark Magician,Monster,7,Spellcaster,Dark,2500,2100
Kuriboh,Monster,1,Fiend,Dark,300,200
Summoned Skull,Monster,6,Fiend,Dark,2500,1200
Celtic Guardian,Monster,4,Warrior,Earth,1400,1200
";

fn stock_shop() -> CardShop {
    CardShop::from_reader(std::io::Cursor::new(STOCK)).unwrap()
}

fn atk_values(shop: &CardShop) -> Vec<i32> {
    shop.cards().map(|card| card.atk()).collect()
}

fn def_values(shop: &CardShop) -> Vec<i32> {
    shop.cards().map(|card| card.def()).collect()
}

fn is_ordered(values: &[i32], comp: impl Fn(i32, i32) -> bool) -> bool {
    values.windows(2).all(|w| !comp(w[1], w[0]))
}

/// Load a stock list from an actual file on disk.
#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(STOCK.as_bytes()).expect("Failed to write stock list");

    let shop = CardShop::from_path(file.path()).expect("Failed to load stock list");
    assert_eq!(shop.len(), 5);
    assert_eq!(shop.card_at(0).unwrap().name(), "Blue-Eyes White Dragon");
    assert_eq!(shop.card_at(4).unwrap().name(), "Celtic Guardian");
}

/// Every algorithm sorts the same stock to the same ascending atk order.
#[test]
fn test_all_algorithms_agree_on_atk_ascending() {
    let mut by_bubble = stock_shop();
    let mut by_insertion = stock_shop();
    let mut by_merge = stock_shop();
    let mut by_quick = stock_shop();

    by_bubble.bubble_sort(ascending, SortKey::Atk).unwrap();
    by_insertion.insertion_sort(ascending, SortKey::Atk).unwrap();
    by_merge.merge_sort(ascending, SortKey::Atk).unwrap();
    by_quick.quick_sort(ascending, SortKey::Atk).unwrap();

    for shop in [&by_bubble, &by_insertion, &by_merge, &by_quick] {
        assert!(is_ordered(&atk_values(shop), ascending));
        assert_eq!(shop.len(), 5);
    }

    // Atk keys are unique in this stock, so the full orders agree too.
    assert_eq!(atk_values(&by_bubble), atk_values(&by_insertion));
    assert_eq!(atk_values(&by_bubble), atk_values(&by_merge));
    assert_eq!(atk_values(&by_bubble), atk_values(&by_quick));
    assert_eq!(atk_values(&by_bubble), vec![300, 1400, 2500, 2500, 3000]);
}

/// Descending by def via the inverted predicate.
#[test]
fn test_descending_by_def() {
    let mut shop = stock_shop();
    shop.merge_sort(descending, SortKey::Def).unwrap();
    assert_eq!(def_values(&shop), vec![2500, 2100, 1200, 1200, 200]);
    assert!(is_ordered(&def_values(&shop), descending));
}

/// Sorting permutes the stock; no card appears or disappears.
#[test]
fn test_sort_preserves_the_multiset() {
    let mut shop = stock_shop();
    shop.quick_sort(ascending, SortKey::Def).unwrap();

    let mut names: Vec<&str> = shop.cards().map(|card| card.name()).collect();
    names.sort_unstable();
    let mut expected = vec![
        "Blue-Eyes White Dragon",
        "Celtic Guardian",
        "Dark Magician",
        "Kuriboh",
        "Summoned Skull",
    ];
    expected.sort_unstable();
    assert_eq!(names, expected);
}

/// Merge sort keeps equal atk cards in their original relative order.
#[test]
fn test_merge_sort_is_stable_on_duplicate_atk() {
    let mut shop = stock_shop();
    shop.merge_sort(ascending, SortKey::Atk).unwrap();

    // Dark Magician (atk 2500) precedes Summoned Skull (atk 2500) in the
    // file, and still does after the sort.
    let names: Vec<&str> = shop.cards().map(|card| card.name()).collect();
    let magician = names.iter().position(|n| *n == "Dark Magician").unwrap();
    let skull = names.iter().position(|n| *n == "Summoned Skull").unwrap();
    assert!(magician < skull);
}

/// A shop compared to an identically loaded shop is equal; any reordering or
/// difference breaks equality.
#[test]
fn test_shop_equality() {
    let original = stock_shop();
    assert_eq!(original, stock_shop());

    let mut reordered = stock_shop();
    reordered.bubble_sort(ascending, SortKey::Atk).unwrap();
    assert_ne!(original, reordered);

    let mut shorter = stock_shop();
    shorter.clear();
    assert_ne!(original, shorter);

    let mut tweaked = CardShop::new();
    for card in original.cards() {
        tweaked.add(card.clone());
    }
    assert_eq!(original, tweaked);
    tweaked.add(YGOCard::new("Extra", "Monster", 1, "Fiend", "Dark", 1, 1));
    assert_ne!(original, tweaked);
}

/// Name-only display range is inclusive on both ends.
#[test]
fn test_names_in_range() {
    let shop = stock_shop();
    assert_eq!(
        shop.names_in_range(1, 3).unwrap(),
        vec!["Dark Magician", "Kuriboh", "Summoned Skull"]
    );
    assert!(shop.names_in_range(3, 5).is_err());
}

/// Re-sorting an already sorted shop costs nothing for the swap-counting
/// passes and leaves the order untouched for all four algorithms.
#[test]
fn test_resort_behavior() {
    let mut shop = stock_shop();
    shop.insertion_sort(ascending, SortKey::Atk).unwrap();
    let sorted = atk_values(&shop);

    assert_eq!(shop.bubble_sort(ascending, SortKey::Atk).unwrap(), 0);
    assert_eq!(shop.insertion_sort(ascending, SortKey::Atk).unwrap(), 0);
    shop.merge_sort(ascending, SortKey::Atk).unwrap();
    shop.quick_sort(ascending, SortKey::Atk).unwrap();
    assert_eq!(atk_values(&shop), sorted);
}
