use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Node, Pod, PodSpec, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use pod_node_matrix::config::Scope;
use pod_node_matrix::error::MatrixError;
use pod_node_matrix::grid::{Host, WorkloadUnit};
use pod_node_matrix::source::ClusterSource;

/// Pod bound to `node` (pass "" for an unscheduled pod).
#[allow(dead_code)]
pub fn make_test_pod(name: &str, namespace: &str, node: &str, phase: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            node_name: (!node.is_empty()).then(|| node.to_string()),
            ..Default::default()
        }),
        status: Some(PodStatus {
            phase: Some(phase.to_string()),
            ..Default::default()
        }),
    }
}

#[allow(dead_code)]
pub fn make_test_node(name: &str) -> Node {
    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/* ============================= FAKE SOURCE ============================= */

/// In-memory cluster that counts how often each listing is requested.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeSource {
    pub pods: Vec<Pod>,
    pub nodes: Vec<Node>,
    pub fail_pods: bool,
    pub fail_nodes: bool,
    pub unit_calls: AtomicUsize,
    pub host_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new(pods: Vec<Pod>, nodes: Vec<Node>) -> Self {
        Self { pods, nodes, ..Default::default() }
    }

    pub fn host_calls(&self) -> usize {
        self.host_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterSource for FakeSource {
    async fn list_units(&self, scope: &Scope) -> Result<Vec<WorkloadUnit>, MatrixError> {
        self.unit_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_pods {
            return Err(MatrixError::transport("pods", "Unauthorized"));
        }
        Ok(self
            .pods
            .iter()
            .filter(|p| match scope {
                Scope::Namespace(ns) => p.metadata.namespace.as_deref() == Some(ns.as_str()),
                Scope::AllNamespaces => true,
            })
            .map(WorkloadUnit::from)
            .collect())
    }

    async fn list_hosts(&self) -> Result<Vec<Host>, MatrixError> {
        self.host_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_nodes {
            return Err(MatrixError::transport("nodes", "connection refused"));
        }
        Ok(self.nodes.iter().map(Host::from).collect())
    }
}
