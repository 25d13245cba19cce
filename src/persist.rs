use anyhow::*;
use directories_next::BaseDirs;
use std::fs;
use std::path::PathBuf;

const BEST_STREAK_FILE: &str = "best_streak";

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("quizcraft");
    Ok(dir)
}

pub fn read_best_streak() -> u32 {
    get_data_dir()
        .and_then(|dir| fs::read_to_string(dir.join(BEST_STREAK_FILE)).map_err(Error::from))
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0)
}

pub fn write_best_streak(streak: u32) -> Result<()> {
    let dir = get_data_dir()?;
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(BEST_STREAK_FILE), streak.to_string())?;
    Ok(())
}
