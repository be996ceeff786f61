use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  # show pod statuses per node in the current namespace
  kubectl pod-node-matrix

  # show pod statuses per node in a given namespace
  kubectl pod-node-matrix -n test-namespace

  # show pod statuses per node in all namespaces
  kubectl pod-node-matrix -A

  # show full node names and status words (best with few nodes)
  kubectl pod-node-matrix --verbose";

#[derive(Parser)]
#[command(name = "kubectl-pod_node_matrix", bin_name = "kubectl pod-node-matrix")]
#[command(about = "Show a [pod status x node] matrix in table view")]
#[command(long_about = "Shows pod statuses against nodes in a table to speed up troubleshooting.\n\n\
A column full of failures points at a node; a row full of failures points at the \
workload itself. Pods whose node is unknown have their name highlighted.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Show full node names and status words instead of shortcuts.
    /// Only practical with a few nodes
    #[arg(long)]
    pub verbose: bool,

    /// List pods across all namespaces. Overrides --namespace
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Namespace to list pods from (defaults to the kubeconfig context namespace)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Kubeconfig cluster to use
    #[arg(long)]
    pub cluster: Option<String>,

    /// Kubeconfig user to use
    #[arg(long)]
    pub user: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Order node columns by name instead of API order
    #[arg(long)]
    pub sort_nodes: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}
