use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::info;

use crate::config::Scope;
use crate::error::MatrixError;
use crate::grid::{Host, Phase, WorkloadUnit};

/* ============================= TRAIT ============================= */

/// Where pods and nodes come from. Each call returns a full, unordered
/// snapshot.
#[async_trait]
pub trait ClusterSource {
    async fn list_units(&self, scope: &Scope) -> Result<Vec<WorkloadUnit>, MatrixError>;

    async fn list_hosts(&self) -> Result<Vec<Host>, MatrixError>;
}

/* ============================= CONVERSIONS ============================= */

impl From<&Pod> for WorkloadUnit {
    fn from(pod: &Pod) -> Self {
        let host = pod
            .spec
            .as_ref()
            .and_then(|s| s.node_name.clone())
            .unwrap_or_default();
        let phase = pod
            .status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .unwrap_or_default();

        WorkloadUnit {
            name: pod.metadata.name.clone().unwrap_or_default(),
            namespace: pod.metadata.namespace.clone().unwrap_or_default(),
            host,
            phase: Phase::parse(phase),
        }
    }
}

impl From<&Node> for Host {
    fn from(node: &Node) -> Self {
        Host::new(node.metadata.name.clone().unwrap_or_default())
    }
}

/* ============================= KUBE SOURCE ============================= */

pub struct KubeSource {
    client: Client,
}

impl KubeSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Namespace of the client's kubeconfig context (`default` if unset).
    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }
}

#[async_trait]
impl ClusterSource for KubeSource {
    async fn list_units(&self, scope: &Scope) -> Result<Vec<WorkloadUnit>, MatrixError> {
        let pods: Api<Pod> = match scope {
            Scope::Namespace(ns) => Api::namespaced(self.client.clone(), ns),
            Scope::AllNamespaces => Api::all(self.client.clone()),
        };

        let pod_list = pods
            .list(&ListParams::default())
            .await
            .map_err(|e| MatrixError::transport("pods", e))?;

        info!(count = pod_list.items.len(), scope = %scope, "pods_listed");
        Ok(pod_list.items.iter().map(WorkloadUnit::from).collect())
    }

    async fn list_hosts(&self) -> Result<Vec<Host>, MatrixError> {
        let nodes: Api<Node> = Api::all(self.client.clone());

        let node_list = nodes
            .list(&ListParams::default())
            .await
            .map_err(|e| MatrixError::transport("nodes", e))?;

        info!(count = node_list.items.len(), "nodes_listed");
        Ok(node_list.items.iter().map(Host::from).collect())
    }
}

/* ============================= TESTS ============================= */
