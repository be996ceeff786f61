use std::fmt;

/* ============================= DISPLAY MODE ============================= */

/// Rendering mode shared by the grid builder and the presenter.
///
/// Compact mode shortens status words to glyphs and replaces node names in
/// the header with numeric labels plus a legend table. Verbose mode shows
/// everything literally and is only practical with a handful of nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Compact,
    Verbose,
}

impl DisplayMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose { Self::Verbose } else { Self::Compact }
    }

    pub fn is_verbose(self) -> bool {
        self == Self::Verbose
    }
}

/* ============================= SCOPE ============================= */

/// Which pods to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Namespace(String),
    AllNamespaces,
}

impl Scope {
    /// `-A` wins over an explicit namespace, matching kubectl.
    pub fn resolve(all_namespaces: bool, namespace: Option<String>, fallback: &str) -> Self {
        if all_namespaces {
            return Self::AllNamespaces;
        }
        match namespace {
            Some(ns) if !ns.is_empty() => Self::Namespace(ns),
            _ if !fallback.is_empty() => Self::Namespace(fallback.to_string()),
            _ => Self::Namespace("default".to_string()),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Namespace(ns) => write!(f, "namespace {ns}"),
            Self::AllNamespaces => f.write_str("all namespaces"),
        }
    }
}

/* ============================= HOST ORDER ============================= */

/// Column order for nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostOrder {
    /// Whatever order the API server returned.
    #[default]
    Api,
    ByName,
}

/* ============================= CONFIG ============================= */

#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub mode: DisplayMode,
    pub scope: Scope,
    pub host_order: HostOrder,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            scope: Scope::Namespace("default".to_string()),
            host_order: HostOrder::default(),
        }
    }
}

/* ============================= TESTS ============================= */
