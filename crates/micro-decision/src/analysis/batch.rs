//! CSV batch analysis. Each input row is analyzed on its own; a bad row yields an error
//! row in the output rather than aborting the run.

use super::request::{AnalyzeRequest, NumericField};
use super::{analyze_request, AnalysisResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("unable to read batch input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid batch csv: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    decision_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    dream_job: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequency: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    time_period: Option<String>,
}

impl From<BatchRow> for AnalyzeRequest {
    fn from(row: BatchRow) -> Self {
        AnalyzeRequest {
            decision_id: row.decision_id,
            dream_job: row.dream_job,
            frequency: row.frequency.map(NumericField::Text),
            time_period: row.time_period.map(NumericField::Text),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}

const OUTPUT_HEADER: [&str; 10] = [
    "row",
    "decision",
    "habit_type",
    "pattern",
    "butterfly_intensity",
    "dream_job",
    "capability_score",
    "capability_percent",
    "advice",
    "error",
];

/// One line of batch output. Rows start at 1, excluding the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub row: usize,
    pub decision: String,
    pub habit_type: String,
    pub pattern: String,
    pub butterfly_intensity: Option<i64>,
    pub dream_job: String,
    pub capability_score: Option<i64>,
    pub capability_percent: Option<u8>,
    pub advice: String,
    pub error: String,
}

impl BatchRecord {
    fn success(row: usize, result: AnalysisResult) -> Self {
        Self {
            row,
            decision: result.decision.0,
            habit_type: result.habit_type.label().to_string(),
            pattern: result.pattern.label().to_string(),
            butterfly_intensity: Some(result.butterfly_intensity),
            dream_job: result.dream_job,
            capability_score: Some(result.capability_score),
            capability_percent: Some(result.capability_percent),
            advice: result.advice,
            error: String::new(),
        }
    }

    fn failure(row: usize, decision: Option<String>, error: String) -> Self {
        Self {
            row,
            decision: decision.unwrap_or_default(),
            habit_type: String::new(),
            pattern: String::new(),
            butterfly_intensity: None,
            dream_job: String::new(),
            capability_score: None,
            capability_percent: None,
            advice: String::new(),
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub records: Vec<BatchRecord>,
}

impl BatchOutcome {
    pub fn failed(&self) -> usize {
        self.records.iter().filter(|record| record.is_error()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.records.len() - self.failed()
    }

    /// The header is written even when there are no records.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), BatchError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if self.records.is_empty() {
            csv_writer.write_record(OUTPUT_HEADER)?;
        }
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub struct BatchAnalyzer;

impl BatchAnalyzer {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BatchOutcome, BatchError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<BatchOutcome, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut outcome = BatchOutcome::default();

        for (index, row) in csv_reader.deserialize::<BatchRow>().enumerate() {
            let row_number = index + 1;
            let row = match row {
                Ok(row) => row,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(row = row_number, error = %err, "unreadable batch row");
                    outcome
                        .records
                        .push(BatchRecord::failure(row_number, None, err.to_string()));
                    continue;
                }
            };
            let decision = row.decision_id.clone();

            let record = match analyze_request(row.into()) {
                Ok(result) => BatchRecord::success(row_number, result),
                Err(err) => BatchRecord::failure(row_number, decision, err.to_string()),
            };
            outcome.records.push(record);
        }

        tracing::debug!(
            rows = outcome.records.len(),
            failed = outcome.failed(),
            "batch analyzed"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const INPUT: &str = "decision_id,dream_job,frequency,time_period\n\
D1,software engineer,2,3\n\
G2,doctor,,\n\
,doctor,1,1\n\
D4,entrepreneur,often,2\n\
X1,,1,1\n";

    fn outcome() -> BatchOutcome {
        BatchAnalyzer::from_reader(Cursor::new(INPUT)).expect("batch parses")
    }

    #[test]
    fn analyzes_each_row_independently() {
        let outcome = outcome();
        assert_eq!(outcome.records.len(), 5);
        assert_eq!(outcome.succeeded(), 3);
        assert_eq!(outcome.failed(), 2);

        let first = &outcome.records[0];
        assert_eq!(first.row, 1);
        assert_eq!(first.butterfly_intensity, Some(-54));
        assert_eq!(first.habit_type, "bad");
    }

    #[test]
    fn blank_cells_fall_back_to_defaults() {
        let outcome = outcome();
        let defaults = &outcome.records[1];
        assert_eq!(defaults.butterfly_intensity, Some(10));

        let unknown = &outcome.records[4];
        assert_eq!(unknown.habit_type, "unknown");
        assert_eq!(unknown.dream_job, "your dream career");
        assert_eq!(unknown.capability_percent, Some(50));
    }

    #[test]
    fn bad_rows_are_reported_inline() {
        let outcome = outcome();
        assert_eq!(outcome.records[2].error, "decision_id is required");
        assert_eq!(outcome.records[3].decision, "D4");
        assert_eq!(
            outcome.records[3].error,
            "frequency must be an integer, got 'often'"
        );
    }

    #[test]
    fn writes_csv_with_header() {
        let mut buffer = Vec::new();
        outcome().write_csv(&mut buffer).expect("csv written");
        let text = String::from_utf8(buffer).expect("utf8 output");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("row,decision,habit_type,pattern,butterfly_intensity,dream_job,capability_score,capability_percent,advice,error")
        );
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn unreadable_rows_do_not_stop_the_batch() {
        let mut input = b"decision_id,dream_job,frequency,time_period\nD1,doctor,1,1\n".to_vec();
        input.extend_from_slice(b"G1,doc\xfftor,1,1\n");
        input.extend_from_slice(b"G2,doctor,1,1\n");

        let outcome = BatchAnalyzer::from_reader(Cursor::new(input)).expect("batch completes");
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(outcome.failed(), 1);

        assert_eq!(outcome.records[0].decision, "D1");
        assert!(!outcome.records[0].is_error());
        assert_eq!(outcome.records[1].row, 2);
        assert!(outcome.records[1].is_error());
        assert_eq!(outcome.records[2].decision, "G2");
        assert_eq!(outcome.records[2].butterfly_intensity, Some(10));
    }

    #[test]
    fn header_only_input_still_writes_header() {
        let outcome = BatchAnalyzer::from_reader(Cursor::new(
            "decision_id,dream_job,frequency,time_period\n",
        ))
        .expect("batch parses");
        assert!(outcome.records.is_empty());

        let mut buffer = Vec::new();
        outcome.write_csv(&mut buffer).expect("csv written");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8 output"),
            format!("{}\n", OUTPUT_HEADER.join(","))
        );
    }
}
