use std::path::Path;

use anyhow::Context;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::info;

use pod_node_matrix::config::{DisplayMode, HostOrder, MatrixConfig, Scope};
use pod_node_matrix::snapshot::collect_snapshot;
use pod_node_matrix::source::KubeSource;

use crate::cli::Cli;

/* ============================= CLIENT ============================= */

/// Kubeconfig overrides from `--context`, `--cluster` and `--user`, or
/// `None` when none were given.
fn kube_config_options(cli: &Cli) -> Option<KubeConfigOptions> {
    if cli.context.is_none() && cli.cluster.is_none() && cli.user.is_none() {
        return None;
    }
    Some(KubeConfigOptions {
        context: cli.context.clone(),
        cluster: cli.cluster.clone(),
        user: cli.user.clone(),
    })
}

/// Build a client honouring the connectivity flags, or fall back to the
/// usual kubeconfig / in-cluster discovery.
async fn build_client(kubeconfig: Option<&Path>, options: Option<KubeConfigOptions>) -> anyhow::Result<Client> {
    if kubeconfig.is_none() && options.is_none() {
        return Client::try_default()
            .await
            .context("Failed to connect to Kubernetes cluster. Is your kubeconfig valid?");
    }

    let options = options.unwrap_or_default();
    let config = match kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("Cannot read kubeconfig {}", path.display()))?;
            Config::from_custom_kubeconfig(kubeconfig, &options).await
        }
        None => Config::from_kubeconfig(&options).await,
    }
    .context("Cannot load kubeconfig")?;

    Client::try_from(config).context("Failed to build Kubernetes client")
}

/* ============================= ENTRY ============================= */

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let client = build_client(cli.kubeconfig.as_deref(), kube_config_options(&cli)).await?;
    let source = KubeSource::new(client);

    let config = MatrixConfig {
        mode: DisplayMode::from_verbose(cli.verbose),
        scope: Scope::resolve(cli.all_namespaces, cli.namespace, source.default_namespace()),
        host_order: if cli.sort_nodes { HostOrder::ByName } else { HostOrder::Api },
    };
    info!(scope = %config.scope, mode = ?config.mode, "matrix_requested");

    let report = collect_snapshot(&source, &config).await?;
    print!("{}", report.render());

    Ok(())
}

/* ============================= TESTS ============================= */

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_overrides_uses_default_discovery() {
        let cli = Cli::parse_from(["kubectl-pod_node_matrix", "-A"]);
        assert!(kube_config_options(&cli).is_none());
    }

    #[test]
    fn test_cluster_and_user_reach_kubeconfig_options() {
        let cli = Cli::parse_from(["kubectl-pod_node_matrix", "--cluster", "prod-eu", "--user", "admin"]);
        let options = kube_config_options(&cli).unwrap();
        assert_eq!(options.context, None);
        assert_eq!(options.cluster.as_deref(), Some("prod-eu"));
        assert_eq!(options.user.as_deref(), Some("admin"));
    }
}
