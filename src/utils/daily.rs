// src/utils/daily.rs

//! Daily scratch-file naming.
//!
//! Files are named `{year}n{month}y{day}r-{N}.{ext}` with month and day
//! unpadded; `N` continues from the highest number already present for the
//! given date's prefix.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{AppError, Result};

/// Build the file-name prefix for a date, e.g. `2026n8y7r`.
fn date_prefix(date: NaiveDate) -> String {
    format!("{}n{}y{}r", date.year(), date.month(), date.day())
}

/// Find the next free scratch-file name in `dir` for the given date.
pub fn next_daily_filename(dir: &Path, date: NaiveDate, ext: &str) -> Result<String> {
    let prefix = date_prefix(date);
    let pattern = Regex::new(&format!(
        "^{}-(\\d+)\\.{}$",
        regex::escape(&prefix),
        regex::escape(ext)
    ))
    .map_err(|e| AppError::config(format!("Bad scratch-file pattern: {e}")))?;

    let mut max_num = 0u32;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(caps) = pattern.captures(name) {
            if let Some(num) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                max_num = max_num.max(num);
            }
        }
    }

    Ok(format!("{}-{}.{}", prefix, max_num + 1, ext))
}

/// Create the next empty daily scratch file in `dir`, returning its path.
pub fn create_daily_file(dir: &Path, date: NaiveDate, ext: &str) -> Result<PathBuf> {
    let name = next_daily_filename(dir, date, ext)?;
    let path = dir.join(&name);
    fs::write(&path, "")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_file_of_the_day_is_number_one() {
        let tmp = TempDir::new().unwrap();
        let name = next_daily_filename(tmp.path(), date(2026, 1, 20), "md").unwrap();
        assert_eq!(name, "2026n1y20r-1.md");
    }

    #[test]
    fn continues_from_the_highest_existing_number() {
        let tmp = TempDir::new().unwrap();
        for existing in ["2026n8y7r-1.md", "2026n8y7r-3.md"] {
            std::fs::write(tmp.path().join(existing), "").unwrap();
        }

        let name = next_daily_filename(tmp.path(), date(2026, 8, 7), "md").unwrap();
        assert_eq!(name, "2026n8y7r-4.md");
    }

    #[test]
    fn ignores_other_dates_extensions_and_shapes() {
        let tmp = TempDir::new().unwrap();
        for existing in [
            "2026n8y6r-9.md",   // yesterday
            "2026n8y7r-2.txt",  // other extension
            "2026n8y7r-x.md",   // non-numeric suffix
            "notes.md",
        ] {
            std::fs::write(tmp.path().join(existing), "").unwrap();
        }

        let name = next_daily_filename(tmp.path(), date(2026, 8, 7), "md").unwrap();
        assert_eq!(name, "2026n8y7r-1.md");
    }

    #[test]
    fn create_daily_file_writes_an_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = create_daily_file(tmp.path(), date(2026, 8, 7), "md").unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("2026n8y7r-1.md")
        );
    }
}
