use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::config::DisplayMode;

/* ============================= TYPES ============================= */

/// A node as seen by the matrix. Only the name matters for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub name: String,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Pod lifecycle phase. Anything outside the four known phases keeps its
/// literal text (an absent phase is the empty string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Other(String),
}

impl Phase {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Pending" => Self::Pending,
            "Running" => Self::Running,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Other(raw) => raw,
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            Self::Pending => Emphasis::Warning,
            Self::Running | Self::Succeeded => Emphasis::Success,
            Self::Failed => Emphasis::Danger,
            Self::Other(_) => Emphasis::Neutral,
        }
    }

    /// Cell text for this phase under the given mode.
    pub fn text(&self, mode: DisplayMode) -> Cow<'_, str> {
        if mode.is_verbose() {
            return Cow::Borrowed(self.as_str());
        }
        match self {
            Self::Pending => Cow::Borrowed("-"),
            Self::Running | Self::Succeeded => Cow::Borrowed("✓"),
            Self::Failed => Cow::Borrowed("x"),
            Self::Other(raw) => Cow::Borrowed(raw.as_str()),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pod reduced to what the matrix needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadUnit {
    pub name: String,
    pub namespace: String,
    /// Empty when the pod has not been scheduled.
    pub host: String,
    pub phase: Phase,
}

/// Visual weight of a cell, independent of its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Emphasis {
    #[default]
    Neutral,
    Warning,
    Success,
    Danger,
}

/* ============================= HOST INDEX ============================= */

/// Host name to zero-based column, assigned in input order. Unnamed hosts
/// get no column, so an unscheduled pod can never land in one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostIndex {
    columns: HashMap<String, usize>,
    names: Vec<String>,
}

impl HostIndex {
    pub fn build(hosts: &[Host]) -> Self {
        let mut index = Self::default();
        for host in hosts {
            if host.name.is_empty() {
                warn!("unnamed_host_ignored");
                continue;
            }
            if index.columns.contains_key(&host.name) {
                warn!(host = %host.name, "duplicate_host_ignored");
                continue;
            }
            index.columns.insert(host.name.clone(), index.names.len());
            index.names.push(host.name.clone());
        }
        index
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Host names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/* ============================= ROW LAYOUT ============================= */

/// Row shape: the pod name first, then one status cell per host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub host_count: usize,
}

impl RowLayout {
    pub const NAME_COLUMN: usize = 0;

    pub fn new(host_count: usize) -> Self {
        Self { host_count }
    }

    pub fn width(self) -> usize {
        self.host_count + 1
    }

    pub fn status_column(self, host_column: usize) -> usize {
        debug_assert!(host_column < self.host_count);
        host_column + 1
    }
}

/* ============================= ROWS ============================= */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub cells: Vec<String>,
    pub emphasis: Vec<Emphasis>,
}

impl MatrixRow {
    fn blank(layout: RowLayout) -> Self {
        Self {
            cells: vec![String::new(); layout.width()],
            emphasis: vec![Emphasis::Neutral; layout.width()],
        }
    }

    pub fn name(&self) -> &str {
        &self.cells[RowLayout::NAME_COLUMN]
    }

    /// Status cells only, in host column order.
    pub fn status_cells(&self) -> &[String] {
        &self.cells[RowLayout::NAME_COLUMN + 1..]
    }

    pub fn is_orphaned(&self) -> bool {
        self.emphasis[RowLayout::NAME_COLUMN] == Emphasis::Danger
    }
}

/// Everything the presenter needs from one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub index: HostIndex,
    pub layout: RowLayout,
    pub rows: Vec<MatrixRow>,
}

impl Matrix {
    pub fn host_names(&self) -> &[String] {
        self.index.names()
    }
}

/* ============================= BUILD ============================= */

pub fn build_row(
    unit: &WorkloadUnit,
    index: &HostIndex,
    layout: RowLayout,
    mode: DisplayMode,
) -> MatrixRow {
    let mut row = MatrixRow::blank(layout);
    row.cells[RowLayout::NAME_COLUMN] = unit.name.clone();

    match index.column(&unit.host) {
        Some(column) => {
            let at = layout.status_column(column);
            row.cells[at] = unit.phase.text(mode).into_owned();
            row.emphasis[at] = unit.phase.emphasis();
        }
        None => {
            debug!(pod = %unit.name, namespace = %unit.namespace, host = %unit.host, "orphaned_unit");
            row.emphasis[RowLayout::NAME_COLUMN] = Emphasis::Danger;
        }
    }

    row
}

/// Lay out `units` against `hosts`. Never fails; empty inputs are rejected
/// upstream.
pub fn build_matrix(hosts: &[Host], units: &[WorkloadUnit], mode: DisplayMode) -> Matrix {
    let index = HostIndex::build(hosts);
    let layout = RowLayout::new(index.len());
    let rows = units
        .iter()
        .map(|unit| build_row(unit, &index, layout, mode))
        .collect();

    Matrix { index, layout, rows }
}

/* ============================= TESTS ============================= */
