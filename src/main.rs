use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use treelab::Tree;

#[derive(Parser, Debug)]
#[command(name = "treelab", about = "Build binary trees and run structural algorithms on them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input shared by every subcommand that builds a tree from values.
#[derive(Args, Debug)]
struct TreeArgs {
    /// Label printed with rendered output.
    #[arg(long, default_value = "Tree")]
    name: String,
    /// Place values by median split instead of BST insertion.
    #[arg(long)]
    unordered: bool,
    /// Element values, in insertion (or sequence) order.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl TreeArgs {
    fn build(self) -> Tree<i64> {
        if self.unordered {
            Tree::unordered(self.name, self.values)
        } else {
            Tree::ordered(self.name, self.values)
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sideways and flat renderings.
    Show {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Print every root-to-leaf path, leftmost first.
    Paths {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Drop paths whose element sum never reaches the threshold.
    Prune {
        /// Minimum root-to-leaf sum to keep.
        #[arg(long, allow_negative_numbers = true)]
        threshold: i64,
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Keep only elements within [low, high] (BST input expected).
    Range {
        /// Inclusive lower bound.
        #[arg(long, allow_negative_numbers = true)]
        low: i64,
        /// Inclusive upper bound.
        #[arg(long, allow_negative_numbers = true)]
        high: i64,
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Rebuild as a height-balanced BST.
    Balance {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Swap children at every node.
    Mirror {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Least common ancestor of two elements.
    Lca {
        /// First target element.
        #[arg(long, allow_negative_numbers = true)]
        first: i64,
        /// Second target element.
        #[arg(long, allow_negative_numbers = true)]
        second: i64,
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Height, depth and ordering statistics.
    Stats {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Rebuild a tree from its in-order and pre-order listings.
    Rebuild {
        /// Label printed with rendered output.
        #[arg(long, default_value = "Tree")]
        name: String,
        /// Comma-separated in-order listing.
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        in_order: Vec<i64>,
        /// Comma-separated pre-order listing.
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        pre_order: Vec<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { tree } => print_both(&tree.build()),
        Commands::Paths { tree } => run_paths(tree.build())?,
        Commands::Prune { threshold, tree } => {
            let mut tree = tree.build();
            tree.prune_by_sum(threshold)
                .with_context(|| format!("failed to prune by sum {threshold}"))?;
            print_both(&tree);
        }
        Commands::Range { low, high, tree } => {
            let mut tree = tree.build();
            tree.restrict_to_range(&low, &high)
                .with_context(|| format!("failed to restrict to [{low}, {high}]"))?;
            print_both(&tree);
        }
        Commands::Balance { tree } => {
            let mut tree = tree.build();
            tree.rebalance();
            print_both(&tree);
        }
        Commands::Mirror { tree } => {
            let mut tree = tree.build();
            tree.mirror();
            print_both(&tree);
        }
        Commands::Lca { first, second, tree } => {
            let tree = tree.build();
            println!(
                "lca({first}, {second}) = {}",
                tree.least_common_ancestor(&first, &second)
            );
        }
        Commands::Stats { tree } => print_stats(&tree.build()),
        Commands::Rebuild {
            name,
            in_order,
            pre_order,
        } => {
            let tree = Tree::from_traversals(name, in_order, pre_order)
                .context("failed to rebuild tree from traversals")?;
            print_both(&tree);
        }
    }

    Ok(())
}

fn run_paths(tree: Tree<i64>) -> Result<()> {
    let paths = tree.paths().context("cannot enumerate paths")?;
    for path in paths {
        println!("{path}");
    }
    Ok(())
}

fn print_both(tree: &Tree<i64>) {
    print!("{}", tree.render_tree());
    if tree.is_empty() {
        println!();
    }
    println!("{}", tree.render_flat());
}

fn print_stats(tree: &Tree<i64>) {
    let height = tree.height();
    println!("name\t{}", tree.name());
    println!("nodes\t{}", tree.len());
    println!("leaves\t{}", tree.leaf_count());
    println!("height\t{height}");
    match tree.deepest_element() {
        Some(element) => println!("deepest\t{element}"),
        None => println!("deepest\t-"),
    }
    for level in 0..=height {
        println!("level {level}\t{}", tree.count_at_level(level));
    }
    println!("bst\t{}", tree.is_bst());
    println!("embedded bsts\t{}", tree.count_embedded_bsts());
}
