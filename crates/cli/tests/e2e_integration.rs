//! End-to-end tests of the SkillEval pipeline.
//!
//! Skills are loaded from a real directory and every model call is served
//! by a scripted provider.

use std::path::Path;
use std::sync::{Arc, Mutex};

use skilleval_agent::{DefaultPrompts, DiscoveryLoop, SessionController, run_declared_skills};
use skilleval_config::{AppConfig, SessionConfig};
use skilleval_core::error::ProviderError;
use skilleval_core::message::{Message, Role};
use skilleval_core::provider::{Provider, ProviderRequest, ProviderResponse};
use skilleval_core::skill::SkillRepository;
use skilleval_eval::{Approach, Evaluator, TaskKind, accuracy, parse_samples_jsonl};
use skilleval_skills::{InMemorySkillRepository, load_skills_dir};

// ── Mock Provider ────────────────────────────────────────────────────────

/// Returns scripted outcomes in sequence and records every request.
struct ScriptedProvider {
    outcomes: Mutex<Vec<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    fn texts(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Ok(text_response(t))).collect())
    }

    fn new(mut outcomes: Vec<Result<ProviderResponse, ProviderError>>) -> Arc<Self> {
        outcomes.reverse();
        Arc::new(Self {
            outcomes: Mutex::new(outcomes),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len()
        };
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| panic!("ScriptedProvider exhausted at call #{call}"))
    }
}

fn text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: None,
        model: "e2e-model".into(),
        metadata: serde_json::Map::new(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────

fn write_skill(root: &Path, dir: &str, name: &str, description: &str, body: &str) {
    let skill_dir = root.join(dir);
    std::fs::create_dir_all(&skill_dir).unwrap();
    std::fs::write(
        skill_dir.join("SKILL.md"),
        format!("---\nname: {name}\ndescription: {description}\n---\n{body}\n"),
    )
    .unwrap();
}

fn skills_on_disk() -> (tempfile::TempDir, Arc<dyn SkillRepository>) {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(
        tmp.path(),
        "xbrl-tagging",
        "xbrl-tagging",
        "Choose the XBRL tag of a numeric entity",
        "# XBRL tagging\nFor sales figures also load revenue-recognition.",
    );
    write_skill(
        tmp.path(),
        "revenue-recognition",
        "revenue-recognition",
        "How sales are reported",
        "# Revenue\nNet sales map to Revenues.",
    );
    write_skill(
        tmp.path(),
        "sentiment",
        "sentiment",
        "Classify review sentiment",
        "# Sentiment\nAnswer positive or negative.",
    );

    let skills = load_skills_dir(tmp.path()).unwrap();
    (tmp, Arc::new(InMemorySkillRepository::new(skills)))
}

fn session(provider: &Arc<ScriptedProvider>) -> SessionController {
    SessionController::new(provider.clone(), "e2e-model", SessionConfig::default())
}

fn discovery(repository: Arc<dyn SkillRepository>) -> DiscoveryLoop {
    DiscoveryLoop::new(repository, Arc::new(DefaultPrompts::default()))
        .with_target_skill(Some("XBRL-Tagging".into()))
}

const TASK: &str = "What is the XBRL tag of '$5.2 million' in 'Net sales were $5.2 million'?";

// ── Tests ────────────────────────────────────────────────────────────────

#[test]
fn skills_load_sorted_from_disk() {
    let (_tmp, repository) = skills_on_disk();
    let names: Vec<String> = repository.skills().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["revenue-recognition", "sentiment", "xbrl-tagging"]);
    assert!(repository.lookup("XBRL-TAGGING").is_some());
}

#[tokio::test]
async fn discovery_follows_skill_references_to_a_fixed_point() {
    let (_tmp, repository) = skills_on_disk();
    let selector_provider = ScriptedProvider::texts(&[r#"{"skills": ["xbrl-tagging"]}"#]);
    let executor_provider = ScriptedProvider::texts(&[
        "```json\n{\"skills\": [\"revenue-recognition\"]}\n```",
        r#"{"skills": []}"#,
        r#"{"message": "Revenues"}"#,
    ]);
    let mut selector = session(&selector_provider);
    let mut executor = session(&executor_provider);

    let outcome = discovery(repository)
        .run(TASK, &mut selector, &mut executor)
        .await
        .unwrap();

    assert_eq!(outcome.selected_skill_names, vec!["xbrl-tagging"]);
    assert!(outcome.hit_target_skill);
    assert_eq!(outcome.discovery_rounds, 2);
    assert_eq!(outcome.new_skills_discovered, 1);
    assert!(!outcome.truncated);
    assert_eq!(outcome.answer, "Revenues");
    assert!(outcome.execution_context.starts_with("Skill 1:\n"));
    assert!(outcome.execution_context.contains("Skill 2:\nHow sales are reported\n"));

    // The roster reaches the selector's system prompt
    let selection = &selector_provider.requests()[0];
    assert!(selection.messages[0].content.contains("- **sentiment**:"));

    // The execution call carries both loaded skills in its system prompt
    let requests = executor_provider.requests();
    assert_eq!(requests.len(), 3);
    let execution = requests.last().unwrap();
    assert!(execution.messages.iter().any(|m| {
        m.role == Role::System && m.content.contains("Net sales map to Revenues.")
    }));
    assert_eq!(execution.messages.last().unwrap().content, TASK);
    assert!(execution.messages.len() <= 5);
}

#[tokio::test]
async fn declared_skills_inline_known_skills() {
    let (_tmp, repository) = skills_on_disk();
    let provider = ScriptedProvider::texts(&[
        "[SKILLS NEEDED: revenue-recognition, balance-sheets]",
        "Revenues",
    ]);
    let mut controller = session(&provider);

    let outcome = run_declared_skills(&mut controller, TASK, repository.as_ref())
        .await
        .unwrap();

    assert_eq!(
        outcome.required_skills,
        vec!["revenue-recognition", "balance-sheets"]
    );
    assert_eq!(outcome.loaded_skills.len(), 1);
    assert_eq!(outcome.response, "Revenues");
    assert_eq!(controller.history().len(), 1);

    let enriched = provider.requests()[1].messages.last().unwrap().content.clone();
    assert!(enriched.contains("[SKILL: revenue-recognition]"));
    assert!(!enriched.contains("[SKILL: balance-sheets]"));
}

#[tokio::test]
async fn evaluate_dataset_emits_json_lines() {
    let (_tmp, repository) = skills_on_disk();
    let dataset = format!(
        "{}\n",
        serde_json::json!({"prompt": TASK, "label": "Revenues"})
    );
    let samples = parse_samples_jsonl(&dataset).unwrap();

    let selector_provider = ScriptedProvider::texts(&[r#"{"skills": ["xbrl-tagging"]}"#]);
    let executor_provider = ScriptedProvider::texts(&[
        r#"{"skills": []}"#,
        r#"{"message": "Revenues"}"#,
    ]);
    let simple_provider = ScriptedProvider::new(vec![
        Ok(text_response(r#"{"message": "InterestExpense"}"#)),
        Err(ProviderError::ContextLengthExceeded("too long".into())),
        Err(ProviderError::ContextLengthExceeded("too long".into())),
    ]);
    let simple_config = SessionConfig {
        max_truncation_retries: 1,
        ..SessionConfig::default()
    };

    let mut evaluator = Evaluator::new(
        session(&selector_provider),
        session(&executor_provider),
        SessionController::new(simple_provider.clone(), "e2e-model", simple_config),
        discovery(repository),
        TaskKind::XbrlTag,
    );

    let records = evaluator.run_all(&samples).await.unwrap();
    let lines: Vec<String> = records
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    let parsed: Vec<serde_json::Value> = lines
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(parsed[0]["task_type"], "agent_skill_based");
    assert_eq!(parsed[0]["predicted_label"], "Revenues");
    assert_eq!(parsed[0]["correct"], true);
    assert_eq!(parsed[0]["hit_target_skill"], true);
    assert_eq!(parsed[1]["task_type"], "agent_simple");
    assert_eq!(parsed[1]["predicted_label"], "InterestExpense");
    assert_eq!(parsed[2]["task_type"], "agent_skill_full_context");
    assert_eq!(parsed[2]["predicted_label"], "unknown");
    assert!(parsed[2]["error"].as_str().unwrap().contains("Context overflow"));

    // The retry ran on half of the full-context prompt
    let simple_requests = simple_provider.requests();
    let first = simple_requests[1].messages.last().unwrap().content.chars().count();
    let retry = simple_requests[2].messages.last().unwrap().content.chars().count();
    assert_eq!(retry, first / 2);

    let summary = accuracy(&records, Approach::SkillBased);
    assert_eq!(summary.accuracy(), Some(1.0));
    assert_eq!(accuracy(&records, Approach::FullContext).failed, 1);
}

#[test]
fn default_config_drives_sessions() {
    let config = AppConfig::default();
    let provider = ScriptedProvider::texts(&[]);
    let controller = SessionController::from_config(provider, &config);
    assert_eq!(controller.model(), "gpt-4o-mini");
    assert_eq!(controller.system_prompt(), config.session.system_prompt);
}
