//! Wren CLI
//!
//! Builds a render tree from a JSON fixture, prunes leftover anonymous
//! boxes, lays it out and prints the result.

mod fixture;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use wren_render::{RenderId, RenderTree};

use fixture::FixtureNode;

/// Wren render-tree inspector
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build, clean up, lay out and print a fixture
    wren fixtures/table.json

    # Print the tree as JSON
    wren --json fixtures/table.json

    # Keep anonymous boxes and skip layout
    wren --no-cleanup --no-layout fixtures/table.json
"#)]
struct Cli {
    /// Path to a render-tree fixture
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,

    /// Print a JSON snapshot instead of the outline
    #[arg(long)]
    json: bool,

    /// Keep leftover anonymous blocks
    #[arg(long)]
    no_cleanup: bool,

    /// Skip the layout pass
    #[arg(long)]
    no_layout: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let fixture = FixtureNode::load(&cli.fixture)
        .with_context(|| format!("loading {}", cli.fixture.display()))?;
    let mut tree = fixture.build()?;
    let root = tree.root();

    if !cli.no_cleanup {
        remove_all_leftover_anonymous_boxes(&mut tree);
    }
    if !cli.no_layout {
        tree.update_layout();
    }
    let _ = tree
        .verify(root)
        .context("render tree links are inconsistent")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tree.snapshot(root))?);
    } else {
        println!("=== Render Tree ===");
        print_render_object(&tree, root, 0);
        println!("\n=== Layers ===");
        println!("{} layers", tree.layers().len());
        println!("\n=== Invalidations ===");
        println!("{} records", tree.scheduler().log().len());
    }
    Ok(())
}

/// Run the anonymous-box cleanup from every container, deepest first.
fn remove_all_leftover_anonymous_boxes(tree: &mut RenderTree) {
    let mut order = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(tree.children(id));
    }
    for &id in order.iter().rev() {
        if tree.contains(id) && tree[id].kind().can_have_children() {
            tree.remove_leftover_anonymous_boxes(id);
        }
    }
}

/// Recursively print a render object and its subtree
fn print_render_object(tree: &RenderTree, id: RenderId, depth: usize) {
    let indent = "  ".repeat(depth);
    let object = &tree[id];
    let name = object.kind().render_name();
    let display = object.style().display;

    if object.is_anonymous() {
        print!("{indent}{} {}", name.dimmed(), "(anonymous)".dimmed());
    } else {
        print!("{indent}{}", name.cyan());
    }
    print!(" {}", format!("[{display}]").blue());
    if let Some(text) = object.text() {
        let shown = text.replace('\n', "\\n").replace(' ', "\u{00B7}");
        print!(" {}", format!("\"{shown}\"").green());
    }
    if object.layer().is_some() {
        print!(" {}", "layer".magenta());
    }
    if tree.min_max_known(id) {
        let widths = object.min_max_width();
        print!(" min={:.1} max={:.1}", widths.min, widths.max);
    }
    if tree.needs_layout(id) {
        print!(" {}", "needs-layout".yellow());
    }
    println!();

    for child in tree.children(id) {
        print_render_object(tree, child, depth + 1);
    }
}
