//! Runs every approach over evaluation samples.

use chrono::Utc;
use skilleval_agent::{DiscoveryLoop, DiscoveryOutcome, SessionController, parse_answer};
use skilleval_core::error::SessionError;
use skilleval_skills::render_full_context;
use std::time::Instant;
use tracing::{info, warn};

use crate::labels::UNKNOWN;
use crate::record::{EvaluationRecord, is_correct};
use crate::sample::{Approach, Sample, TaskKind};

/// Owns the sessions and the discovery loop. Samples run one at a time.
pub struct Evaluator {
    selector: SessionController,
    executor: SessionController,
    simple: SessionController,
    discovery: DiscoveryLoop,
    task: TaskKind,
}

impl Evaluator {
    /// `selector` and `executor` drive the skill-based approach; `simple`
    /// drives the approaches without discovery.
    pub fn new(
        selector: SessionController,
        executor: SessionController,
        simple: SessionController,
        discovery: DiscoveryLoop,
        task: TaskKind,
    ) -> Self {
        Self {
            selector,
            executor,
            simple,
            discovery,
            task,
        }
    }

    pub fn task(&self) -> TaskKind {
        self.task
    }

    /// Run all three approaches on one sample.
    ///
    /// Each approach starts from reset sessions. Context overflow ends only
    /// the approach it happened in; its record carries the error. Any other
    /// fault aborts the sample.
    pub async fn run_sample(&mut self, sample: &Sample) -> Result<Vec<EvaluationRecord>, SessionError> {
        let mut records = Vec::with_capacity(Approach::ALL.len());
        for approach in Approach::ALL {
            let record = self.run_approach(approach, sample).await?;
            info!(
                index = sample.index,
                approach = %approach,
                predicted = %record.predicted_label,
                correct = record.correct,
                "Sample evaluated"
            );
            records.push(record);
        }
        Ok(records)
    }

    /// Run every sample in order.
    pub async fn run_all(&mut self, samples: &[Sample]) -> Result<Vec<EvaluationRecord>, SessionError> {
        let mut records = Vec::with_capacity(samples.len() * Approach::ALL.len());
        for sample in samples {
            records.extend(self.run_sample(sample).await?);
        }
        Ok(records)
    }

    /// Run one approach on one sample, then reset the sessions it used.
    pub async fn run_approach(
        &mut self,
        approach: Approach,
        sample: &Sample,
    ) -> Result<EvaluationRecord, SessionError> {
        let started = Instant::now();

        let result = match approach {
            Approach::SkillBased => self.skill_based(&sample.prompt).await,
            Approach::Simple => self.simple(&sample.prompt).await,
            Approach::FullContext => {
                let skills = self.discovery.repository().skills();
                let prompt = format!("{}\n{}", sample.prompt, render_full_context(&skills));
                self.simple(&prompt).await
            }
        };

        let (run, error) = match result {
            Ok(run) => (run, None),
            Err(e) if e.is_context_overflow() => {
                warn!(index = sample.index, approach = %approach, error = %e, "Approach failed");
                (ApproachRun::default(), Some(e.to_string()))
            }
            Err(e) => {
                self.reset_for(approach);
                return Err(e);
            }
        };

        let predicted_label = if error.is_some() {
            UNKNOWN.to_string()
        } else {
            self.task.extract_label(&run.answer)
        };
        let correct = error.is_none() && is_correct(&sample.label, &run.answer);

        let (model, select_history, exec_history) = match approach {
            Approach::SkillBased => (
                self.executor.model(),
                Some(self.selector.history().turns().to_vec()),
                self.executor.history().turns().to_vec(),
            ),
            Approach::Simple | Approach::FullContext => (
                self.simple.model(),
                None,
                self.simple.history().turns().to_vec(),
            ),
        };

        let outcome = run.outcome;
        let record = EvaluationRecord {
            index: sample.index,
            prompt: sample.prompt.clone(),
            true_label: sample.label.clone(),
            predicted_label,
            raw_response: run.answer,
            correct,
            selected_skills_step1: outcome.as_ref().map(|o| o.selected_skill_names.clone()),
            hit_target_skill: outcome.as_ref().map(|o| o.hit_target_skill),
            new_skills_discovered: outcome.as_ref().map(|o| o.new_skills_discovered),
            discovery_rounds: outcome.as_ref().map(|o| o.discovery_rounds),
            discovery_truncated: outcome.as_ref().map(|o| o.truncated),
            elapsed_seconds: round4(started.elapsed().as_secs_f64()),
            model: model.to_string(),
            timestamp: Utc::now(),
            chat_history_agent_skill_select: select_history,
            chat_history_agent_exec: exec_history,
            task_type: approach,
            error,
        };

        self.reset_for(approach);
        Ok(record)
    }

    async fn skill_based(&mut self, task: &str) -> Result<ApproachRun, SessionError> {
        let outcome = self
            .discovery
            .run(task, &mut self.selector, &mut self.executor)
            .await?;
        Ok(ApproachRun {
            answer: outcome.answer.clone(),
            outcome: Some(outcome),
        })
    }

    async fn simple(&mut self, prompt: &str) -> Result<ApproachRun, SessionError> {
        let system = self.discovery.prompts().default_system();
        let reply = self.simple.exchange(prompt, Some(system.as_str())).await?;
        Ok(ApproachRun {
            answer: parse_answer(&reply),
            outcome: None,
        })
    }

    fn reset_for(&mut self, approach: Approach) {
        match approach {
            Approach::SkillBased => {
                self.selector.reset();
                self.executor.reset();
            }
            Approach::Simple | Approach::FullContext => self.simple.reset(),
        }
    }
}

#[derive(Default)]
struct ApproachRun {
    answer: String,
    outcome: Option<DiscoveryOutcome>,
}

fn round4(secs: f64) -> f64 {
    (secs * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{ScriptedProvider, overflow, text};
    use skilleval_agent::DefaultPrompts;
    use skilleval_config::SessionConfig;
    use skilleval_core::error::ProviderError;
    use skilleval_core::skill::{SkillMetadata, SkillRepository};
    use skilleval_skills::InMemorySkillRepository;
    use std::sync::Arc;

    struct Providers {
        selector: Arc<ScriptedProvider>,
        executor: Arc<ScriptedProvider>,
        simple: Arc<ScriptedProvider>,
    }

    fn evaluator(providers: &Providers, simple_config: SessionConfig) -> Evaluator {
        let repository: Arc<dyn SkillRepository> =
            Arc::new(InMemorySkillRepository::new(vec![SkillMetadata::new(
                "xbrl-tag",
                "Pick the XBRL tag",
                "# XBRL\nSales map to Revenues",
            )]));
        let discovery = DiscoveryLoop::new(repository, Arc::new(DefaultPrompts::default()))
            .with_target_skill(Some("xbrl-tag".into()));

        Evaluator::new(
            SessionController::new(providers.selector.clone(), "sel-model", SessionConfig::default()),
            SessionController::new(providers.executor.clone(), "exec-model", SessionConfig::default()),
            SessionController::new(providers.simple.clone(), "simple-model", simple_config),
            discovery,
            TaskKind::XbrlTag,
        )
    }

    fn sample() -> Sample {
        Sample {
            index: 3,
            prompt: "Which tag fits 'net sales of $5M'?".into(),
            label: "Revenues".into(),
        }
    }

    #[tokio::test]
    async fn one_record_per_approach() {
        let providers = Providers {
            selector: Arc::new(ScriptedProvider::texts(&[r#"{"skills": ["xbrl-tag"]}"#])),
            executor: Arc::new(ScriptedProvider::texts(&[
                r#"{"skills": []}"#,
                r#"{"message": "Revenues"}"#,
            ])),
            simple: Arc::new(ScriptedProvider::texts(&[
                r#"{"message": "Revenues"}"#,
                r#"{"message": "InterestExpense"}"#,
            ])),
        };
        let mut evaluator = evaluator(&providers, SessionConfig::default());

        let records = evaluator.run_sample(&sample()).await.unwrap();
        assert_eq!(records.len(), 3);

        let skill_based = &records[0];
        assert_eq!(skill_based.task_type, Approach::SkillBased);
        assert_eq!(skill_based.index, 3);
        assert_eq!(skill_based.predicted_label, "Revenues");
        assert!(skill_based.correct);
        assert_eq!(
            skill_based.selected_skills_step1.as_deref(),
            Some(&["xbrl-tag".to_string()][..])
        );
        assert_eq!(skill_based.hit_target_skill, Some(true));
        assert_eq!(skill_based.discovery_rounds, Some(1));
        assert_eq!(skill_based.new_skills_discovered, Some(0));
        assert_eq!(skill_based.discovery_truncated, Some(false));
        assert_eq!(skill_based.model, "exec-model");
        assert_eq!(
            skill_based.chat_history_agent_skill_select.as_ref().map(Vec::len),
            Some(1)
        );

        let simple = &records[1];
        assert_eq!(simple.task_type, Approach::Simple);
        assert!(simple.correct);
        assert!(simple.selected_skills_step1.is_none());
        assert!(simple.chat_history_agent_skill_select.is_none());
        assert_eq!(simple.chat_history_agent_exec.len(), 1);
        assert_eq!(simple.model, "simple-model");

        let full = &records[2];
        assert_eq!(full.task_type, Approach::FullContext);
        assert_eq!(full.predicted_label, "InterestExpense");
        assert!(!full.correct);
        assert!(full.error.is_none());
    }

    #[tokio::test]
    async fn full_context_inlines_skill_bodies() {
        let providers = Providers {
            selector: Arc::new(ScriptedProvider::texts(&[r#"{"skills": []}"#])),
            executor: Arc::new(ScriptedProvider::texts(&[r#"{"message": "Revenues"}"#])),
            simple: Arc::new(ScriptedProvider::texts(&["Revenues", "Revenues"])),
        };
        let mut evaluator = evaluator(&providers, SessionConfig::default());
        evaluator.run_sample(&sample()).await.unwrap();

        let requests = providers.simple.requests();
        assert_eq!(requests.len(), 2);
        let simple_user = &requests[0].messages.last().unwrap().content;
        let full_user = &requests[1].messages.last().unwrap().content;
        assert!(!simple_user.contains("Sales map to Revenues"));
        assert!(full_user.starts_with("Which tag fits"));
        assert!(full_user.contains("- **xbrl-tag**:"));
        assert!(full_user.contains("Sales map to Revenues"));
    }

    #[tokio::test]
    async fn sessions_reset_between_approaches() {
        let providers = Providers {
            selector: Arc::new(ScriptedProvider::texts(&[r#"{"skills": []}"#])),
            executor: Arc::new(ScriptedProvider::texts(&[r#"{"message": "Revenues"}"#])),
            simple: Arc::new(ScriptedProvider::texts(&["Revenues", "Revenues"])),
        };
        let mut evaluator = evaluator(&providers, SessionConfig::default());
        let simple_id = evaluator.simple.session_id().clone();

        evaluator.run_sample(&sample()).await.unwrap();

        assert!(evaluator.selector.history().is_empty());
        assert!(evaluator.executor.history().is_empty());
        assert!(evaluator.simple.history().is_empty());
        assert_ne!(evaluator.simple.session_id(), &simple_id);

        // The full-context call starts on a new identity with an empty thread.
        let requests = providers.simple.requests();
        assert_ne!(requests[0].session_id, requests[1].session_id);
        assert_eq!(requests[1].messages.len(), 2);
    }

    #[tokio::test]
    async fn overflow_fails_only_that_approach() {
        let providers = Providers {
            selector: Arc::new(ScriptedProvider::texts(&[r#"{"skills": []}"#])),
            executor: Arc::new(ScriptedProvider::texts(&[r#"{"message": "Revenues"}"#])),
            simple: Arc::new(ScriptedProvider::new(vec![
                Err(overflow()),
                Err(overflow()),
                Ok(text(r#"{"message": "Revenues"}"#)),
            ])),
        };
        let config = SessionConfig {
            max_truncation_retries: 1,
            ..SessionConfig::default()
        };
        let mut evaluator = evaluator(&providers, config);

        let records = evaluator.run_sample(&sample()).await.unwrap();
        assert_eq!(records.len(), 3);

        let simple = &records[1];
        assert_eq!(simple.predicted_label, "unknown");
        assert!(!simple.correct);
        assert!(simple.error.as_deref().unwrap().contains("2 attempts"));
        assert!(simple.chat_history_agent_exec.is_empty());

        assert!(records[0].error.is_none());
        assert!(records[2].correct);
    }

    #[tokio::test]
    async fn other_faults_abort_the_sample() {
        let providers = Providers {
            selector: Arc::new(ScriptedProvider::new(vec![Err(ProviderError::AuthenticationFailed(
                "bad key".into(),
            ))])),
            executor: Arc::new(ScriptedProvider::texts(&[])),
            simple: Arc::new(ScriptedProvider::texts(&[])),
        };
        let mut evaluator = evaluator(&providers, SessionConfig::default());

        let err = evaluator.run_sample(&sample()).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Provider(ProviderError::AuthenticationFailed(_))
        ));
        assert!(providers.simple.requests().is_empty());
    }

    #[tokio::test]
    async fn run_all_keeps_sample_order() {
        let providers = Providers {
            selector: Arc::new(ScriptedProvider::texts(&[r#"{"skills": []}"#, r#"{"skills": []}"#])),
            executor: Arc::new(ScriptedProvider::texts(&["Revenues", "Goodwill"])),
            simple: Arc::new(ScriptedProvider::texts(&["a", "b", "c", "d"])),
        };
        let mut evaluator = evaluator(&providers, SessionConfig::default());
        let mut second = sample();
        second.index = 4;

        let records = evaluator.run_all(&[sample(), second]).await.unwrap();
        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![3, 3, 3, 4, 4, 4]);
        assert_eq!(records[3].raw_response, "Goodwill");
    }
}
