//! Searchable symbols collected from the documentation tree.

use docnav_core::NavigatorIndex;
use docnav_core::types::{NodeKind, RawNode};

/// A navigable symbol offered to quick navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableSymbol {
    pub title: String,
    pub path: String,
    pub kind: NodeKind,
    /// Titles of the enclosing nodes, outermost first. Display only.
    pub ancestor_breadcrumbs: Vec<String>,
}

impl SearchableSymbol {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            kind: NodeKind::default(),
            ancestor_breadcrumbs: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<String>) -> Self {
        self.ancestor_breadcrumbs = breadcrumbs;
        self
    }

    /// Breadcrumbs joined for display, e.g. `SlothCreator > Sloth`.
    pub fn relative_path(&self) -> String {
        self.ancestor_breadcrumbs.join(" > ")
    }
}

/// Symbols in tree order. The order is the tie-break order of matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCorpus {
    symbols: Vec<SearchableSymbol>,
}

impl SearchCorpus {
    /// Collects every node with a path, pre-order.
    ///
    /// Group markers and other nodes without a path are skipped, but their
    /// children are still visited.
    pub fn build(roots: &[RawNode]) -> Self {
        let mut symbols = Vec::new();
        let mut breadcrumbs = Vec::new();
        collect(roots, &mut breadcrumbs, &mut symbols);

        tracing::debug!(symbols = symbols.len(), "built search corpus");
        Self { symbols }
    }

    /// Same symbols as [`SearchCorpus::build`], read from an already flattened tree.
    pub fn from_navigator(navigator: &NavigatorIndex) -> Self {
        let symbols: Vec<_> = navigator
            .entries()
            .iter()
            .filter(|entry| entry.is_navigable())
            .map(|entry| {
                let mut chain = navigator.parents(entry.uid);
                chain.pop();
                let breadcrumbs = chain.into_iter().map(|parent| parent.title.clone()).collect();

                SearchableSymbol::new(entry.title.clone(), entry.path.clone().unwrap_or_default())
                    .with_kind(entry.kind.clone())
                    .with_breadcrumbs(breadcrumbs)
            })
            .collect();

        tracing::debug!(symbols = symbols.len(), "built search corpus from navigator");
        Self { symbols }
    }

    pub fn symbols(&self) -> &[SearchableSymbol] {
        &self.symbols
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchableSymbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<SearchableSymbol> for SearchCorpus {
    fn from_iter<I: IntoIterator<Item = SearchableSymbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SearchCorpus {
    type Item = &'a SearchableSymbol;
    type IntoIter = std::slice::Iter<'a, SearchableSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn collect(nodes: &[RawNode], breadcrumbs: &mut Vec<String>, symbols: &mut Vec<SearchableSymbol>) {
    for node in nodes {
        if let Some(path) = &node.path {
            symbols.push(
                SearchableSymbol::new(node.title.clone(), path.clone())
                    .with_kind(node.kind.clone())
                    .with_breadcrumbs(breadcrumbs.clone()),
            );
        }

        if !node.children.is_empty() {
            breadcrumbs.push(node.title.clone());
            collect(&node.children, breadcrumbs, symbols);
            breadcrumbs.pop();
        }
    }
}
