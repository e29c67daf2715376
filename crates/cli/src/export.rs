//! # Quiz Export
//!
//! Writers for the tabulated quiz: CSV with `MCQ, Choices, Correct`
//! columns, or a pretty-printed JSON array of the same records.

use anyhow::{Context, Result};
use mcqgen::QuizRow;
use std::fs;
use std::path::Path;

/// Writes the quiz rows as a CSV file with a header row.
pub fn write_csv(path: &Path, rows: &[QuizRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file at '{}'", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the quiz rows as a pretty-printed JSON array of records.
pub fn write_json(path: &Path, rows: &[QuizRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON file at '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<QuizRow> {
        vec![
            QuizRow {
                mcq: "2+2=?".to_string(),
                choices: "a: 3 | b: 4 | c: 5 | d: 6".to_string(),
                correct: "b".to_string(),
            },
            QuizRow {
                mcq: "What color is the sky, usually?".to_string(),
                choices: "a: blue | b: green".to_string(),
                correct: "a".to_string(),
            },
        ]
    }

    /// Serializing to CSV and re-parsing yields the same (mcq, correct)
    /// pairs, with the expected header row.
    #[test]
    fn test_csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quiz.csv");
        let rows = sample_rows();

        write_csv(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("MCQ,Choices,Correct"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<QuizRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(parsed.len(), rows.len());
        for (parsed_row, row) in parsed.iter().zip(&rows) {
            assert_eq!(parsed_row.mcq, row.mcq);
            assert_eq!(parsed_row.correct, row.correct);
        }
    }

    #[test]
    fn test_json_export_is_an_array_of_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quiz.json");

        write_json(&path, &sample_rows()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["MCQ"], "2+2=?");
        assert_eq!(records[0]["Correct"], "b");
    }
}
