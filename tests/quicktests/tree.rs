use citybst::Tree;

use std::collections::HashSet;

/// Builds a tree by inserting every city in order.
fn build(cities: &[String]) -> Tree {
    let mut tree = Tree::new();
    for city in cities {
        tree = tree.insert(city);
    }

    tree
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let tree = build(&xs);

    xs.iter()
        .all(|x| tree.search(x).map(|n| n.city()) == Some(x.as_str()))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn sorted_without_duplicates(xs: Vec<String>) -> bool {
    let tree = build(&xs);

    let mut expected = xs.clone();
    expected.sort();
    expected.dedup();

    tree.iter().eq(expected.iter().map(String::as_str)) && tree.count_nodes() == expected.len()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<String>) -> bool {
    let tree = build(&xs);
    let count = tree.count_nodes();
    let height = tree.height();
    let cities: Vec<String> = tree.iter().map(String::from).collect();

    let tree = xs.iter().fold(tree, |tree, x| tree.insert(x));

    tree.count_nodes() == count
        && tree.height() == height
        && tree.iter().eq(cities.iter().map(String::as_str))
}

#[quickcheck]
fn with_removals(xs: Vec<String>, removals: Vec<String>) -> bool {
    let mut tree = build(&xs);
    for removal in &removals {
        let count = tree.count_nodes();
        let present = tree.contains(removal);
        tree = tree.remove(removal);

        // Exactly one node goes away, and only if the city was there.
        if tree.count_nodes() + usize::from(present) != count {
            return false;
        }
    }

    let mut still_present = xs;
    for removal in &removals {
        // We may have inserted the same city multiple times - remove each one.
        while let Some(pos) = still_present.iter().position(|x| x == removal) {
            still_present.swap_remove(pos);
        }
    }

    removals.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn increasing_cities_degenerate(len: u8) -> bool {
    let cities: Vec<String> = (0..len).map(|i| format!("city-{i:03}")).collect();
    let tree = build(&cities);

    tree.height() == isize::from(len) - 1 && tree.count_nodes() == usize::from(len)
}

#[quickcheck]
fn min_is_smallest(xs: Vec<String>) -> bool {
    let tree = build(&xs);

    tree.find_min().map(|n| n.city()) == xs.iter().min().map(String::as_str)
}
