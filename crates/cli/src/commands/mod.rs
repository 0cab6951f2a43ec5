//! Subcommand implementations and the wiring they share.

pub mod classify;
pub mod evaluate;
pub mod onboard;
pub mod skills;

use skilleval_agent::{DefaultPrompts, DiscoveryLoop, SessionController};
use skilleval_config::AppConfig;
use skilleval_core::provider::Provider;
use skilleval_core::skill::SkillRepository;
use skilleval_eval::TaskKind;
use skilleval_skills::{InMemorySkillRepository, load_skills_dir};
use std::path::{Path, PathBuf};
use std::sync::Arc;

type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

pub(crate) fn load_config() -> CommandResult<AppConfig> {
    Ok(AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?)
}

/// `--dir`, else `evaluation.skills_dir`, else `./skills`.
pub(crate) fn skills_dir(config: &AppConfig, dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(|| config.evaluation.skills_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("skills"))
}

pub(crate) fn load_repository(dir: &Path) -> CommandResult<Arc<dyn SkillRepository>> {
    let skills = load_skills_dir(dir)?;
    tracing::info!(dir = %dir.display(), count = skills.len(), "Skills loaded");
    Ok(Arc::new(InMemorySkillRepository::new(skills)))
}

/// `--task`, else `evaluation.task`.
pub(crate) fn task_kind(config: &AppConfig, task: Option<String>) -> CommandResult<TaskKind> {
    let name = task.unwrap_or_else(|| config.evaluation.task.clone());
    Ok(name.parse::<TaskKind>()?)
}

pub(crate) fn default_provider(config: &AppConfig) -> CommandResult<Arc<dyn Provider>> {
    let keyless = skilleval_providers::is_local(&config.default_provider);
    if !keyless && !config.has_api_key() && config.providers.is_empty() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    SKILLEVAL_API_KEY, ANTHROPIC_API_KEY or OPENAI_API_KEY");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let router = skilleval_providers::build_from_config(config);
    Ok(router.default().ok_or("No default provider configured")?)
}

pub(crate) fn session(provider: &Arc<dyn Provider>, config: &AppConfig) -> SessionController {
    SessionController::from_config(provider.clone(), config)
}

pub(crate) fn discovery_loop(
    repository: Arc<dyn SkillRepository>,
    config: &AppConfig,
) -> DiscoveryLoop {
    DiscoveryLoop::from_config(
        repository,
        Arc::new(DefaultPrompts::default()),
        &config.discovery,
    )
}
