//! Engine driven through an external process
//!
//! The request is one JSON document on stdin. The anonymized table comes back
//! on stdout as `;`-delimited text with the header row first.

use crate::anonymization::{AnonymizationEngine, StrategyConfig};
use crate::core::registry::DATA_DELIMITER;
use crate::domain::{ClassifiedAttribute, ClassifiedDataset, DatasetId, EngineError, Table};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Document written to the engine's stdin
#[derive(Debug, Serialize)]
pub struct EngineRequest<'a> {
    pub dataset: DatasetId,
    pub config: StrategyConfig,
    pub attributes: &'a [ClassifiedAttribute],
    pub table: &'a Table,
}

/// Spawns the configured command once per anonymization call
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>, working_dir: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl AnonymizationEngine for ProcessEngine {
    fn run(&self, dataset: &ClassifiedDataset, config: StrategyConfig) -> Result<Table, EngineError> {
        let request = EngineRequest {
            dataset: dataset.id,
            config,
            attributes: &dataset.attributes,
            table: &dataset.table,
        };
        let payload =
            serde_json::to_vec(&request).map_err(|e| EngineError::Request(e.to_string()))?;

        tracing::debug!(
            program = %self.program,
            dataset = %dataset.id,
            request_bytes = payload.len(),
            "Spawning engine process"
        );

        let mut child = self.command().spawn()?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Request("engine stdin is not piped".to_string()))?;

        // Written from a separate thread so a large request cannot deadlock
        // against a child that is already filling its stdout pipe.
        let writer = std::thread::spawn(move || stdin.write_all(&payload));
        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| EngineError::Request("stdin writer thread panicked".to_string()))?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        parse_output(&output.stdout)
    }

    fn name(&self) -> &'static str {
        "process"
    }
}

/// Parse the engine's stdout into a table
///
/// An empty output means the engine found no transformation satisfying the
/// privacy model.
pub fn parse_output(stdout: &[u8]) -> Result<Table, EngineError> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(EngineError::NoSolution(
            "engine produced no output table".to_string(),
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(DATA_DELIMITER)
        .from_reader(stdout);

    let header = reader
        .headers()
        .map_err(|e| EngineError::Output(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EngineError::Output(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(header, rows))
}
