//! `skilleval classify`: one pass of the skill discovery pipeline.

use std::path::PathBuf;

pub async fn run(
    prompt: String,
    dir: Option<PathBuf>,
    task: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let task = super::task_kind(&config, task)?;
    let repository = super::load_repository(&super::skills_dir(&config, dir))?;
    let provider = super::default_provider(&config)?;

    let mut selector = super::session(&provider, &config);
    let mut executor = super::session(&provider, &config);
    let discovery = super::discovery_loop(repository, &config);

    let outcome = discovery.run(&prompt, &mut selector, &mut executor).await?;

    println!("Selected:  {}", outcome.selected_skill_names.join(", "));
    println!(
        "Rounds:    {} ({} new skills{})",
        outcome.discovery_rounds,
        outcome.new_skills_discovered,
        if outcome.truncated { ", round cap reached" } else { "" }
    );
    println!("Answer:    {}", outcome.answer);
    println!("Label:     {}", task.extract_label(&outcome.answer));
    Ok(())
}
