use crate::configuration::Settings;
use crate::fixtures::{Fixtures, HarnessError};
use crate::scenarios::{Mismatch, Scenario};

#[derive(Debug)]
pub enum Verdict {
    Passed,
    /// The registry answered differently than expected.
    Failed(Mismatch),
    /// The scenario never got to observe the registry.
    Errored(HarnessError),
    /// The scenario task panicked or was cancelled.
    Aborted(String),
}

#[derive(Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub verdict: Verdict,
}

#[derive(Debug, Default)]
pub struct CatalogReport {
    /// In catalog order.
    pub reports: Vec<ScenarioReport>,
}

impl CatalogReport {
    pub fn passed(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Errored(_) | Verdict::Aborted(_)))
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.reports.len()
    }

    fn count(&self, predicate: impl Fn(&Verdict) -> bool) -> usize {
        self.reports.iter().filter(|r| predicate(&r.verdict)).count()
    }
}

/// Runs one scenario with its own fixtures.
pub async fn run_scenario(settings: Settings, scenario: Scenario) -> ScenarioReport {
    let fixtures = Fixtures::new(settings);
    let verdict = match scenario.run(&fixtures).await {
        Ok(observation) => match scenario.verify(&observation) {
            Ok(()) => Verdict::Passed,
            Err(mismatch) => Verdict::Failed(mismatch),
        },
        Err(e) => Verdict::Errored(e),
    };
    ScenarioReport {
        name: scenario.name,
        verdict,
    }
}

/// Runs every scenario as its own task. Nothing but the immutable settings is
/// shared between them.
#[tracing::instrument(name = "Running catalog", skip_all, fields(scenarios = scenarios.len()))]
pub async fn run_catalog(settings: Settings, scenarios: Vec<Scenario>) -> CatalogReport {
    let handles: Vec<_> = scenarios
        .into_iter()
        .map(|scenario| {
            let name = scenario.name;
            (name, tokio::spawn(run_scenario(settings.clone(), scenario)))
        })
        .collect();

    let mut report = CatalogReport::default();
    for (name, handle) in handles {
        let scenario_report = match handle.await {
            Ok(scenario_report) => scenario_report,
            Err(e) => {
                tracing::error!(scenario = name, error.cause_chain = ?e, "Scenario task aborted");
                ScenarioReport {
                    name,
                    verdict: Verdict::Aborted(e.to_string()),
                }
            }
        };
        report.reports.push(scenario_report);
    }
    report
}
