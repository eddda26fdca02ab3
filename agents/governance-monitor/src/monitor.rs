use eyre::{Report, Result};
use futures_util::future::join_all;
use itertools::Itertools;
use tracing::{info, instrument};

use hyperlane_base::GovernanceMetrics;
use hyperlane_core::{
    u256_to_timestamp, ChainCommunicationError, ChainResult, CoreContext, GovernanceRouter,
};

/// Outcome of monitoring one network
#[derive(Debug)]
pub struct NetworkReport {
    /// The network
    pub network: String,
    /// The recorded recovery timestamp, or why none was recorded
    pub result: ChainResult<u64>,
}

/// Per-network outcomes of one monitoring round, in the order the networks
/// were requested.
#[derive(Debug, Default)]
pub struct GovernanceReport {
    /// One entry per distinct network
    pub networks: Vec<NetworkReport>,
}

impl GovernanceReport {
    /// Networks whose timestamp was recorded
    pub fn succeeded(&self) -> impl Iterator<Item = (&str, u64)> {
        self.networks
            .iter()
            .filter_map(|r| r.result.as_ref().ok().map(|ts| (r.network.as_str(), *ts)))
    }

    /// Networks which failed, with their error
    pub fn failed(&self) -> impl Iterator<Item = (&str, &ChainCommunicationError)> {
        self.networks
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.network.as_str(), e)))
    }

    /// Collapse into a single result. The first failure becomes the error
    /// source; every failed network is named in the message.
    pub fn into_result(self) -> Result<()> {
        let mut failed = self
            .networks
            .into_iter()
            .filter_map(|r| r.result.err().map(|e| (r.network, e)));
        let Some((network, first)) = failed.next() else {
            return Ok(());
        };
        let networks = std::iter::once(network)
            .chain(failed.map(|(network, _)| network))
            .join(", ");
        Err(Report::new(first).wrap_err(format!(
            "Failed to monitor governance router on: {networks}"
        )))
    }
}

/// Read and record the governance router's `recoveryActiveAt` for each
/// network. Fails if any network cannot be monitored, but only after every
/// network has been attempted.
pub async fn monitor_governance<C>(
    context: &C,
    networks: &[String],
    metrics: &GovernanceMetrics,
    environment: &str,
) -> Result<()>
where
    C: CoreContext + ?Sized,
{
    monitor_governance_report(context, networks, metrics, environment)
        .await?
        .into_result()
}

/// Like [`monitor_governance`] but returns the per-network outcomes.
///
/// Every router is resolved before any is read, so an unknown network fails
/// the whole round without touching the chain. Repeated networks are only
/// monitored once. The reads run concurrently on the current task and none
/// is cancelled when a sibling fails.
pub async fn monitor_governance_report<C>(
    context: &C,
    networks: &[String],
    metrics: &GovernanceMetrics,
    environment: &str,
) -> ChainResult<GovernanceReport>
where
    C: CoreContext + ?Sized,
{
    let routers = networks
        .iter()
        .map(String::as_str)
        .unique()
        .map(|network| Ok((network, context.core(network)?.governance_router.clone())))
        .collect::<ChainResult<Vec<_>>>()?;

    let results = join_all(routers.iter().map(|(network, router)| {
        monitor_recovery_active_at(network, router.as_ref(), metrics, environment)
    }))
    .await;

    Ok(GovernanceReport {
        networks: routers
            .into_iter()
            .zip(results)
            .map(|((network, _), result)| NetworkReport {
                network: network.to_owned(),
                result,
            })
            .collect(),
    })
}

/// Read one router's recovery timestamp and record it.
#[instrument(skip_all, fields(network = %network))]
pub async fn monitor_recovery_active_at(
    network: &str,
    router: &dyn GovernanceRouter,
    metrics: &GovernanceMetrics,
    environment: &str,
) -> ChainResult<u64> {
    info!("Getting GovernanceRouter recoveryActiveAt");

    let recovery_active_at = u256_to_timestamp(router.recovery_active_at().await?)?;

    metrics.set_governor_recovery_active_at(network, environment, recovery_active_at);
    Ok(recovery_active_at)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use prometheus::{core::Collector, Registry};

    use hyperlane_base::{ChainCoreContext, CoreMetrics};
    use hyperlane_core::{
        CoreContracts, HyperlaneContract, HyperlaneProtocolError, MAX_SAFE_TIMESTAMP, U256,
    };
    use hyperlane_test::mocks::MockGovernanceRouter;

    use super::*;

    const ENV: &str = "testnet";

    fn metrics() -> GovernanceMetrics {
        let core = CoreMetrics::new("test", None, Arc::new(Registry::new())).unwrap();
        GovernanceMetrics::new(&core).unwrap()
    }

    fn recorded_series(metrics: &GovernanceMetrics) -> usize {
        metrics
            .recovery_active_at()
            .collect()
            .iter()
            .map(|family| family.get_metric().len())
            .sum()
    }

    fn recorded(metrics: &GovernanceMetrics, network: &str) -> i64 {
        metrics
            .recovery_active_at()
            .with_label_values(&[network, ENV])
            .get()
    }

    fn router_returning(network: &str, value: U256, times: usize) -> MockGovernanceRouter {
        let mut router = MockGovernanceRouter::named(network);
        router
            .expect__recovery_active_at()
            .times(times)
            .returning(move || Ok(value));
        router
    }

    fn failing_router(network: &str) -> MockGovernanceRouter {
        let mut router = MockGovernanceRouter::named(network);
        router
            .expect__recovery_active_at()
            .times(1)
            .returning(|| Err(ChainCommunicationError::from_other_str("rpc unavailable")));
        router
    }

    fn context(routers: Vec<MockGovernanceRouter>) -> ChainCoreContext {
        let cores = routers
            .into_iter()
            .map(|router| {
                let network = router.network().to_owned();
                (network, Some(CoreContracts::new(Arc::new(router))))
            })
            .collect();
        ChainCoreContext::new(cores)
    }

    fn names(networks: &[&str]) -> Vec<String> {
        networks.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn reads_and_records_each_network_once() {
        let context = context(vec![
            router_returning("alfajores", U256::from(1_650_000_000u64), 1),
            router_returning("fuji", U256::zero(), 1),
        ]);
        let metrics = metrics();

        monitor_governance(&context, &names(&["alfajores", "fuji"]), &metrics, ENV)
            .await
            .unwrap();

        assert_eq!(recorded_series(&metrics), 2);
        assert_eq!(recorded(&metrics, "alfajores"), 1_650_000_000);
        assert_eq!(recorded(&metrics, "fuji"), 0);
    }

    #[tokio::test]
    async fn repeated_networks_are_read_once() {
        let context = context(vec![router_returning("alfajores", U256::from(7u64), 1)]);
        let metrics = metrics();

        let report = monitor_governance_report(
            &context,
            &names(&["alfajores", "alfajores", "alfajores"]),
            &metrics,
            ENV,
        )
        .await
        .unwrap();

        assert_eq!(report.networks.len(), 1);
        assert_eq!(recorded_series(&metrics), 1);
    }

    #[tokio::test]
    async fn empty_network_list_is_a_noop() {
        let context = context(vec![router_returning("alfajores", U256::one(), 0)]);
        let metrics = metrics();

        let report = monitor_governance_report(&context, &[], &metrics, ENV)
            .await
            .unwrap();

        assert!(report.networks.is_empty());
        assert_eq!(recorded_series(&metrics), 0);
        assert!(report.into_result().is_ok());
    }

    #[tokio::test]
    async fn failing_network_does_not_block_others() {
        let context = context(vec![
            router_returning("alfajores", U256::from(11u64), 1),
            failing_router("fuji"),
            router_returning("mumbai", U256::from(13u64), 1),
        ]);
        let metrics = metrics();
        let networks = names(&["alfajores", "fuji", "mumbai"]);

        let report = monitor_governance_report(&context, &networks, &metrics, ENV)
            .await
            .unwrap();

        assert_eq!(
            report.succeeded().collect::<Vec<_>>(),
            vec![("alfajores", 11), ("mumbai", 13)]
        );
        assert_eq!(
            report.failed().map(|(n, _)| n).collect::<Vec<_>>(),
            vec!["fuji"]
        );
        assert_eq!(recorded_series(&metrics), 2);

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("fuji"));
        assert_eq!(err.root_cause().to_string(), "rpc unavailable");
    }

    #[tokio::test]
    async fn aggregate_error_surfaces_after_all_writes() {
        let context = context(vec![
            failing_router("alfajores"),
            router_returning("fuji", U256::from(5u64), 1),
        ]);
        let metrics = metrics();

        let result =
            monitor_governance(&context, &names(&["alfajores", "fuji"]), &metrics, ENV).await;

        assert!(result.is_err());
        assert_eq!(recorded(&metrics, "fuji"), 5);
    }

    #[tokio::test]
    async fn unknown_network_fails_before_any_read() {
        let context = context(vec![router_returning("alfajores", U256::one(), 0)]);
        let metrics = metrics();

        let err = monitor_governance_report(
            &context,
            &names(&["alfajores", "kovan"]),
            &metrics,
            ENV,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            ChainCommunicationError::HyperlaneProtocolError(
                HyperlaneProtocolError::UnknownNetwork(ref n)
            ) if n == "kovan"
        ));
        assert_eq!(recorded_series(&metrics), 0);
    }

    #[tokio::test]
    async fn oversized_timestamp_is_not_recorded() {
        let context = context(vec![
            router_returning("alfajores", U256::from(MAX_SAFE_TIMESTAMP) + 1, 1),
            router_returning("fuji", U256::from(MAX_SAFE_TIMESTAMP), 1),
        ]);
        let metrics = metrics();

        let report = monitor_governance_report(
            &context,
            &names(&["alfajores", "fuji"]),
            &metrics,
            ENV,
        )
        .await
        .unwrap();

        let failed: Vec<_> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert!(matches!(
            failed[0],
            (
                "alfajores",
                ChainCommunicationError::HyperlaneProtocolError(
                    HyperlaneProtocolError::TimestampOutOfRange(_)
                )
            )
        ));
        assert_eq!(recorded_series(&metrics), 1);
        assert_eq!(recorded(&metrics, "fuji"), MAX_SAFE_TIMESTAMP as i64);
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn logs_each_read_with_network() {
        let router = router_returning("alfajores", U256::one(), 1);
        let metrics = metrics();

        monitor_recovery_active_at("alfajores", &router, &metrics, ENV)
            .await
            .unwrap();

        assert!(logs_contain("Getting GovernanceRouter recoveryActiveAt"));
        assert!(logs_contain("network=alfajores"));
    }

    #[test]
    fn report_lists_every_failed_network() {
        let report = GovernanceReport {
            networks: vec![
                NetworkReport {
                    network: "alfajores".into(),
                    result: Err(ChainCommunicationError::from_other_str("first")),
                },
                NetworkReport {
                    network: "fuji".into(),
                    result: Ok(1),
                },
                NetworkReport {
                    network: "mumbai".into(),
                    result: Err(ChainCommunicationError::from_other_str("second")),
                },
            ],
        };

        let err = report.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to monitor governance router on: alfajores, mumbai"
        );
        assert_eq!(err.root_cause().to_string(), "first");
    }
}
