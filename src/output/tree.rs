// src/output/tree.rs
// =============================================================================
// Renders the link graph as a text tree rooted at the start page:
//
//   https://example.com
//   ├── https://example.com/a
//   │   └── https://example.com/c
//   └── https://example.com/b
//
// Link graphs have cycles (every page links back to the home page), so a
// `seen` set local to one rendering makes sure each URL is printed once.
// A page's links are filtered against it before anything is printed, which
// means:
// - the `└──` always goes to the last link actually shown
// - a URL linked from a page shows up there, not inside an earlier sibling's
//   subtree
// =============================================================================

use std::collections::{HashMap, HashSet};

use crate::crawl::CrawlResult;

pub fn render_tree(result: &CrawlResult) -> String {
    render_from(result.root(), result.links())
}

pub fn render_from(root: &str, links: &HashMap<String, Vec<String>>) -> String {
    let mut out = format!("{}\n", root);
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(root);

    if let Some(children) = links.get(root) {
        render_children(children, "", links, &mut seen, &mut out);
    }

    out
}

fn render_children<'a>(
    children: &'a [String],
    prefix: &str,
    links: &'a HashMap<String, Vec<String>>,
    seen: &mut HashSet<&'a str>,
    out: &mut String,
) {
    // insert() is false for repeats, on this page or anywhere above it
    let fresh: Vec<&'a String> = children
        .iter()
        .filter(|&child| seen.insert(child.as_str()))
        .collect();

    for (i, child) in fresh.iter().enumerate() {
        let is_last = i == fresh.len() - 1;
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(child);
        out.push('\n');

        if let Some(grandchildren) = links.get(*child) {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            render_children(grandchildren, &child_prefix, links, seen, out);
        }
    }
}
