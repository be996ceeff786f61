use tracing::debug;

use crate::config::{HostOrder, MatrixConfig};
use crate::error::MatrixError;
use crate::grid::build_matrix;
use crate::presenter::{Report, present};
use crate::source::ClusterSource;

/// Fetch pods then nodes, validate both, and build the report.
///
/// Nodes are only requested once the pod listing succeeded and was
/// non-empty. Any error returns before a report exists.
pub async fn collect_snapshot<S>(source: &S, config: &MatrixConfig) -> Result<Report, MatrixError>
where
    S: ClusterSource + Sync + ?Sized,
{
    let units = source.list_units(&config.scope).await?;
    if units.is_empty() {
        return Err(MatrixError::ScopeEmpty { scope: config.scope.clone() });
    }

    let mut hosts = source.list_hosts().await?;
    if hosts.is_empty() {
        return Err(MatrixError::NoHosts);
    }

    if config.host_order == HostOrder::ByName {
        hosts.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let matrix = build_matrix(&hosts, &units, config.mode);
    debug!(
        rows = matrix.rows.len(),
        columns = matrix.layout.width(),
        orphaned = matrix.rows.iter().filter(|r| r.is_orphaned()).count(),
        "matrix_built"
    );

    Ok(present(&matrix, config.mode))
}
