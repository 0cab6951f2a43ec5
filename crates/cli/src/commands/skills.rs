//! `skilleval skills`: print the roster the selector would see.

use skilleval_skills::render_roster;
use std::path::PathBuf;

pub async fn run(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let dir = super::skills_dir(&config, dir);
    let repository = super::load_repository(&dir)?;

    if repository.is_empty() {
        println!("No skills found in {}", dir.display());
        return Ok(());
    }

    println!("{} skills in {}\n", repository.len(), dir.display());
    println!("{}", render_roster(&repository.skills()));
    Ok(())
}
