use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use citybst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Zero-padded so that numeric and lexicographic order agree.
fn city(i: usize) -> String {
    format!("city-{i:06}")
}

/// Builds a tree by inserting cities in ascending order. Nothing rebalances it
/// so every node only has a right child.
fn get_degenerate_tree(num_levels: usize) -> Tree {
    (0..num_nodes_in_full_tree(num_levels)).map(city).collect()
}

/// Builds a tree by inserting cities in a balanced manner. This adds cities so
/// that, without any self-balancing, the resultant tree will still be balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree {
    let xs = (0..num_nodes_in_full_tree(num_levels))
        .map(city)
        .collect::<Vec<_>>();
    fill_balanced_tree(Tree::new(), &xs)
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(mut tree: Tree, xs: &[String]) -> Tree {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree = tree.insert(&xs[mid]);
        tree = fill_balanced_tree(tree, &xs[..mid]);
        tree = fill_balanced_tree(tree, &xs[mid + 1..]);
    }
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Every iteration gets its own copy of the tree
/// and only the closure is timed.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree, &str)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("degenerate", get_degenerate_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_city_in_tree = city(num_nodes_in_full_tree(num_levels) - 1);
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, num_nodes_in_full_tree(num_levels));

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(&largest_city_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, city| {
        let _node = black_box(tree.search(city));
    });
    bench_helper(c, "remove", |tree, city| {
        tree.take(city);
    });

    bench_helper(c, "insert", |tree, city| {
        let _ = tree.try_insert(&format!("{city}~"));
    });

    bench_helper(c, "search-miss", |tree, city| {
        let _node = black_box(tree.search(&format!("{city}~")));
    });
    bench_helper(c, "remove-miss", |tree, city| {
        tree.take(&format!("{city}~"));
    });

    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
