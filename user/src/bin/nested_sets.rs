use std::cmp::Ordering;

use avl_set::{AvlSet, TotalOrder};

#[derive(Clone, Debug)]
enum Item {
    Leaf(String),
    Node(AvlSet<ItemOrder>),
}

#[derive(Clone, Copy, Debug, Default)]
struct ItemOrder;

impl TotalOrder for ItemOrder {
    type Elt = Item;
    fn compare(&self, lhs: &Item, rhs: &Item) -> Ordering {
        match (lhs, rhs) {
            (Item::Node(x), Item::Node(y)) => x.compare(y),
            (Item::Node(_), Item::Leaf(_)) => Ordering::Less,
            (Item::Leaf(_), Item::Node(_)) => Ordering::Greater,
            (Item::Leaf(x), Item::Leaf(y)) => x.cmp(y),
        }
    }
}

type Set = AvlSet<ItemOrder>;

fn leaf(s: &str) -> Item { Item::Leaf(s.to_owned()) }

fn main() {
    pretty_env_logger::init();

    let s = Set::of_list(vec![leaf("a"), leaf("b"), leaf("a")]);
    log::info!("{s:?} has {} elements", s.cardinal());
    assert_eq!(s.cardinal(), 2);

    let words: Vec<_> = "the quick brown fox jumps over the lazy dog"
        .split_whitespace()
        .map(leaf)
        .collect();
    let t = Set::of_list(words);
    t.visualize();

    let nested = Set::of_list(vec![
        Item::Node(s.clone()),
        Item::Node(t.clone()),
        Item::Node(s.inter(&t)),
        leaf("a"),
    ]);
    nested.visualize();
    for item in &nested {
        match item {
            Item::Node(inner) => println!("set of {}", inner.cardinal()),
            Item::Leaf(word) => println!("leaf {word}"),
        }
    }

    let u = s.union(&t);
    let (small, present, large) = u.split(&leaf("fox"));
    println!("{small:?} < fox ({present}) < {large:?}");
    println!("{s:?} subset of {u:?}: {}", s.subset(&u));
    match u.find_first(|x| matches!(x, Item::Leaf(w) if w.as_str() > "m")) {
        Ok(x) => println!("first past m: {x:?}"),
        Err(e) => log::warn!("{e}"),
    }
}
