use crate::config::DisplayMode;
use crate::grid::Matrix;
use crate::table::Table;

pub const NAME_HEADER: &str = "Workload";

/* ============================= REPORT ============================= */

/// The primary matrix plus, in compact mode, the node legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub matrix: Table,
    pub legend: Option<Table>,
}

impl Report {
    /// Primary table immediately followed by the legend.
    pub fn render(&self) -> String {
        let mut out = self.matrix.render();
        if let Some(legend) = &self.legend {
            out.push_str(&legend.render());
        }
        out
    }
}

/* ============================= HEADERS ============================= */

/// Host column headers and legend entries for the given mode.
///
/// Verbose mode uses the node names verbatim and has no legend. Compact mode
/// numbers the columns and returns one `(label, name)` entry per node.
pub fn headers_and_legend(host_names: &[String], mode: DisplayMode) -> (Vec<String>, Vec<(String, String)>) {
    if mode.is_verbose() {
        return (host_names.to_vec(), Vec::new());
    }

    host_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let label = i.to_string();
            (label.clone(), (label, name.clone()))
        })
        .unzip()
}

/* ============================= PRESENT ============================= */

pub fn present(matrix: &Matrix, mode: DisplayMode) -> Report {
    let (host_headers, legend_entries) = headers_and_legend(matrix.host_names(), mode);

    let mut header = Vec::with_capacity(matrix.layout.width());
    header.push(NAME_HEADER.to_string());
    header.extend(host_headers);

    let mut table = Table::with_header(header);
    for row in &matrix.rows {
        table.push_styled(row.cells.clone(), row.emphasis.clone());
    }

    let legend = (!legend_entries.is_empty()).then(|| {
        let mut legend = Table::new();
        for (label, name) in legend_entries {
            legend.push_plain(vec![label, name]);
        }
        legend
    });

    Report { matrix: table, legend }
}

/* ============================= TESTS ============================= */
