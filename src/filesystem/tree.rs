use std::collections::HashMap;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";
const ROOT_LINE: &str = ".";
const SEPARATOR: char = '/';

/// A directory-like node keyed by path segment. A node without children is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathTree {
    children: HashMap<String, PathTree>,
}

impl PathTree {
    pub fn root() -> Self {
        Self::default()
    }

    /// Inserts a `/`-separated relative path, creating missing segments along the way.
    ///
    /// Segments are split verbatim, so doubled or leading separators produce
    /// empty-named entries.
    pub fn insert_path(&mut self, relative_path: &str) {
        relative_path
            .split(SEPARATOR)
            .fold(self, |current, segment| {
                current.children.entry(segment.to_string()).or_default()
            });
    }

    #[cfg(test)]
    pub fn get(&self, segment: &str) -> Option<&PathTree> {
        self.children.get(segment)
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Renders the tree with box-drawing connectors, siblings in ascending order.
    ///
    /// The first line is always `.`; lines are joined by `\n` without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines = vec![ROOT_LINE.to_string()];
        self.render_children("", &mut lines);
        lines.join("\n")
    }

    fn render_children(&self, line_prefix: &str, lines: &mut Vec<String>) {
        let mut names = self.children.keys().collect::<Vec<_>>();
        names.sort();

        let last_index = names.len().saturating_sub(1);
        for (index, name) in names.into_iter().enumerate() {
            let is_last = index == last_index;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{line_prefix}{connector}{name}"));

            let child = &self.children[name];
            if !child.is_empty() {
                let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
                child.render_children(&format!("{line_prefix}{indent}"), lines);
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for PathTree {
    fn from_iter<I: IntoIterator<Item = &'a str>>(paths: I) -> Self {
        paths.into_iter().fold(Self::root(), |mut tree, path| {
            tree.insert_path(path);
            tree
        })
    }
}
