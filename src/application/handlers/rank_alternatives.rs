//! RankAlternativesHandler - Command handler for ranking a decision table.
//!
//! Reads the input table, validates weights/impacts against it, runs the
//! TOPSIS engine and writes the table back with score and rank columns.
//! Nothing is written unless every step succeeds.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{EngineConfig, OutputConfig};
use crate::domain::analysis::{DecisionMatrix, InputValidator, TopsisEngine, TopsisOutcome};
use crate::domain::foundation::TopsisError;
use crate::ports::{Table, TableReader, TableWriter};

/// Command to rank the alternatives of a table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Comma-separated weights, one per criterion column.
    pub weights: String,
    /// Comma-separated `+`/`-` tokens, one per criterion column.
    pub impacts: String,
}

impl RankAlternativesCommand {
    pub fn new(weights: impl Into<String>, impacts: impl Into<String>) -> Self {
        Self {
            weights: weights.into(),
            impacts: impacts.into(),
        }
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    /// The table as written, including the appended columns.
    pub table: Table,
    pub outcome: TopsisOutcome,
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn TableWriter>,
    engine: EngineConfig,
    output: OutputConfig,
}

impl RankAlternativesHandler {
    pub fn new(reader: Arc<dyn TableReader>, writer: Arc<dyn TableWriter>) -> Self {
        Self {
            reader,
            writer,
            engine: EngineConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Use the given engine policies.
    pub fn with_engine_config(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Use the given result table layout.
    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, TopsisError> {
        // 1. Load table
        let mut table = self.reader.read()?;
        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "Loaded input table"
        );

        // 2. Check shape and coerce criteria to numbers
        InputValidator::validate_table_width(table.column_count())?;
        let matrix = Self::decision_matrix(&table)?;

        // 3. Validate weights and impacts against the criteria
        let (weights, impacts) =
            InputValidator::validate(&cmd.weights, &cmd.impacts, matrix.criterion_count())?;

        // 4. Score and rank
        let analysis =
            TopsisEngine::analyze_with(&matrix, &weights, &impacts, self.engine.options())?;
        debug!(
            ideal_best = ?analysis.ideal_best,
            ideal_worst = ?analysis.ideal_worst,
            "Computed ideal points"
        );
        let outcome = analysis.into_outcome();

        // 5. Append result columns
        let scores = outcome
            .scores
            .iter()
            .map(|s| self.output.format_score(*s))
            .collect();
        let ranks = outcome.ranks.iter().map(|r| r.to_string()).collect();
        table.push_column(self.output.score_column.clone(), scores);
        table.push_column(self.output.rank_column.clone(), ranks);

        // 6. Persist
        self.writer.write(&table)?;

        let best: Vec<&str> = outcome
            .best()
            .into_iter()
            .map(|i| matrix.labels()[i].as_str())
            .collect();
        info!(alternatives = outcome.len(), best = ?best, "Ranked alternatives");

        Ok(RankAlternativesResult { table, outcome })
    }

    /// Builds the decision matrix from every column after the label column.
    fn decision_matrix(table: &Table) -> Result<DecisionMatrix, TopsisError> {
        if table.records.is_empty() {
            return Err(TopsisError::shape(
                "Input file must contain at least one data row.",
            ));
        }

        let criteria = table.headers[1..].to_vec();
        let mut builder = DecisionMatrix::builder().criteria(criteria);

        for (i, record) in table.records.iter().enumerate() {
            let label = record.first().cloned().unwrap_or_default();
            let cells = record.get(1..).unwrap_or_default();
            let values = cells
                .iter()
                .enumerate()
                .map(|(j, cell)| {
                    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
                        TopsisError::parse(format!(
                            "All columns except the first one must contain numeric values \
                             (row {}, column '{}': {:?}).",
                            i + 1,
                            table.headers.get(j + 1).map(String::as_str).unwrap_or("?"),
                            cell
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.row(label, values);
        }

        builder.build()
    }
}
