//! Demo driver: builds a tree from random values, unbalances it with a
//! few inserts, then rebalances it, printing the tree and its traversals
//! along the way. Everything here goes through the public `Tree` API; the
//! rendering below is presentation only.

use ordered_tree::{Node, Tree, Value};
use rand::Rng;

fn main() {
    let mut rng = rand::thread_rng();

    let values: Vec<Value> = (0..10).map(|_| rng.gen_range(0..10_000)).collect();
    println!("Building tree from {:?}", values);
    let mut tree = Tree::build(&values);

    print_tree(&tree);
    report_balance(&tree);
    print_traversals(&tree);

    for _ in 0..5 {
        let value = rng.gen_range(100..1_000);
        tree.insert(value);
        println!("Inserted {} in the tree", value);
    }

    print_tree(&tree);
    report_balance(&tree);

    tree.rebalance();
    println!("Rebalanced the tree");

    print_tree(&tree);
    report_balance(&tree);
    print_traversals(&tree);
}

fn report_balance(tree: &Tree) {
    if tree.is_balanced() {
        println!("This tree is balanced");
    } else {
        println!("This tree is not balanced");
    }
}

fn print_traversals(tree: &Tree) {
    println!("Tree on level order");
    println!("{:?}", tree.level_order());
    println!("Tree on preorder");
    println!("{:?}", tree.pre_order());
    println!("Tree on postorder");
    println!("{:?}", tree.post_order());
    println!("Tree on inorder");
    println!("{:?}", tree.in_order());
}

fn print_tree(tree: &Tree) {
    println!("\n=== Ordered Tree ===");
    match tree.root() {
        None => println!("  (empty tree)"),
        Some(root) => print_node(root, "", true),
    }
    println!("====================\n");
}

fn print_node(node: &Node, prefix: &str, is_tail: bool) {
    println!(
        "{}{} {}",
        prefix,
        if is_tail { "└──" } else { "├──" },
        node.value()
    );

    let new_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });

    if let Some(right) = node.right() {
        print_node(right, &new_prefix, node.left().is_none());
    }
    if let Some(left) = node.left() {
        print_node(left, &new_prefix, true);
    }
}
