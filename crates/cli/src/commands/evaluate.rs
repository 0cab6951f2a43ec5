//! `skilleval evaluate`: every approach over a JSONL dataset.
//!
//! Records go to stdout as JSON lines while the run progresses; the
//! accuracy summary goes to stderr.

use skilleval_eval::{Approach, Evaluator, accuracy, parse_samples_jsonl};
use std::io::Write;
use std::path::PathBuf;

pub async fn run(
    dataset: PathBuf,
    dir: Option<PathBuf>,
    task: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let task = super::task_kind(&config, task)?;

    let text = std::fs::read_to_string(&dataset)
        .map_err(|e| format!("Failed to read {}: {e}", dataset.display()))?;
    let samples = parse_samples_jsonl(&text)?;

    let repository = super::load_repository(&super::skills_dir(&config, dir))?;
    let provider = super::default_provider(&config)?;

    let mut evaluator = Evaluator::new(
        super::session(&provider, &config),
        super::session(&provider, &config),
        super::session(&provider, &config),
        super::discovery_loop(repository, &config),
        task,
    );

    tracing::info!(samples = samples.len(), task = %task, "Evaluation started");

    let mut records = Vec::new();
    for sample in &samples {
        match evaluator.run_sample(sample).await {
            Ok(batch) => {
                let mut stdout = std::io::stdout().lock();
                for record in &batch {
                    writeln!(stdout, "{}", serde_json::to_string(record)?)?;
                }
                stdout.flush()?;
                records.extend(batch);
            }
            Err(e) => {
                tracing::error!(index = sample.index, error = %e, "Sample skipped");
            }
        }
    }

    eprintln!();
    for approach in Approach::ALL {
        let summary = accuracy(&records, approach);
        match summary.accuracy() {
            Some(acc) => eprintln!(
                "  {:<26} {:>6.2}%  ({}/{} correct, {} failed)",
                approach.as_str(),
                acc * 100.0,
                summary.correct,
                summary.total,
                summary.failed
            ),
            None => eprintln!("  {:<26}    n/a", approach.as_str()),
        }
    }

    Ok(())
}
