use pet_registry_harness::configuration::get_configuration;
use pet_registry_harness::runner::{Verdict, run_catalog};
use pet_registry_harness::scenarios::catalog;
use pet_registry_harness::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "pet-registry-harness".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration()?;

    // Any arguments select scenarios by name fragment
    let filters: Vec<String> = std::env::args().skip(1).collect();
    let scenarios: Vec<_> = catalog()
        .into_iter()
        .filter(|s| filters.is_empty() || filters.iter().any(|f| s.name.contains(f.as_str())))
        .collect();
    if scenarios.is_empty() {
        anyhow::bail!("No scenario matches {:?}", filters);
    }

    let report = run_catalog(configuration, scenarios).await;
    for scenario in &report.reports {
        match &scenario.verdict {
            Verdict::Passed => tracing::info!(scenario = scenario.name, "Passed"),
            Verdict::Failed(mismatch) => {
                tracing::warn!(scenario = scenario.name, mismatch = %mismatch, "Failed")
            }
            Verdict::Errored(e) => {
                tracing::error!(scenario = scenario.name, error.cause_chain = ?e, "Errored")
            }
            Verdict::Aborted(reason) => {
                tracing::error!(scenario = scenario.name, reason = %reason, "Aborted")
            }
        }
    }
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        errored = report.errored(),
        "Catalog finished"
    );

    if !report.all_passed() {
        anyhow::bail!(
            "{} of {} scenarios did not pass",
            report.reports.len() - report.passed(),
            report.reports.len()
        );
    }
    Ok(())
}
