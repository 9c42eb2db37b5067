use std::fmt::{self, Display};

use super::tree::DirectoryNode;

const INDENT_UNIT: &str = "  ";

/// Renders `tree` as an indented outline.
///
/// Files of a directory come first, then each subdirectory as `name/`
/// followed by its own contents one indentation level deeper.
pub fn format_tree(tree: &DirectoryNode, indent: &str) -> String {
    let mut result = String::new();
    write_tree(&mut result, tree, indent);
    result
}

fn write_tree(out: &mut String, tree: &DirectoryNode, indent: &str) {
    for file in tree.files() {
        out.push_str(indent);
        out.push_str(file);
        out.push('\n');
    }

    let nested = format!("{indent}{INDENT_UNIT}");
    for directory in tree.subdirectories() {
        out.push_str(indent);
        out.push_str(directory.name());
        out.push_str("/\n");
        write_tree(out, directory, &nested);
    }
}

impl Display for DirectoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tree(self, ""))
    }
}
