// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::AppState;

const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request counters and latency samples, keyed by route template so path
/// parameters do not explode the label space.
#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(
        &self,
        route: &str,
        method: &str,
        status: StatusCode,
        latency: Duration,
    ) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), method.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_insert_with(Vec::new)
            .push(latency.as_nanos() as u64);
    }
}

fn percentile_ns(values: &[u64], pct: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let mut v = values.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64 - 1.0) * pct).round() as usize;
    v[idx]
}

/// Prometheus text exposition. Registry gauges come first, then request
/// counters and p95 latencies in sorted label order so scrapes are stable.
pub(crate) async fn render_metrics(state: &AppState) -> String {
    let mut body = format!("dogwalk_build_info{{version=\"{}\"}} 1\n", METRIC_VERSION);
    {
        let registry = state.registry.read().await;
        let assigned = registry
            .dogs
            .iter()
            .filter(|dog| dog.walker_id.is_some())
            .count();
        body.push_str(&format!(
            "dogwalk_cities_total {}\n\
dogwalk_walkers_total {}\n\
dogwalk_dogs_total {}\n\
dogwalk_assigned_dogs_total {}\n\
dogwalk_coverage_edges_total {}\n",
            registry.cities.len(),
            registry.walkers.len(),
            registry.dogs.len(),
            assigned,
            registry.walker_cities.len(),
        ));
    }
    let mut req_counts = state
        .metrics
        .counts
        .lock()
        .await
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect::<Vec<_>>();
    req_counts.sort_by(|a, b| a.0.cmp(&b.0));
    for ((route, method, status), count) in req_counts {
        body.push_str(&format!(
            "http_requests_total{{route=\"{}\",method=\"{}\",status=\"{}\"}} {}\n",
            route, method, status, count
        ));
    }
    let mut req_lat = state
        .metrics
        .latency_ns
        .lock()
        .await
        .iter()
        .map(|(route, vals)| (route.clone(), vals.clone()))
        .collect::<Vec<_>>();
    req_lat.sort_by(|a, b| a.0.cmp(&b.0));
    for (route, vals) in req_lat {
        body.push_str(&format!(
            "http_request_latency_p95_seconds{{route=\"{}\"}} {:.6}\n",
            route,
            percentile_ns(&vals, 0.95) as f64 / 1_000_000_000.0
        ));
    }
    body
}
