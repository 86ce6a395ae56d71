use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::equity::EquityResult;

/// Complete record of one equity query: inputs, seed, and outcome.
/// Serialized to JSONL format for study-session storage and replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Unique identifier for this query (format: YYYYMMDD-NNNNNN)
    pub query_id: String,
    /// Query kind ("headsup" or "range")
    pub kind: String,
    /// RNG seed used for the simulation (enables deterministic replay)
    pub seed: Option<u64>,
    /// Hero hole cards
    pub hero: Vec<Card>,
    /// Villain hole cards for heads-up queries
    #[serde(default)]
    pub villain: Option<Vec<Card>>,
    /// Range notations for range queries
    #[serde(default)]
    pub range: Option<Vec<String>>,
    /// Community cards known when the query ran
    pub board: Vec<Card>,
    /// Win/tie/loss counts and trial total
    pub result: EquityResult,
    /// Derived equity percentage
    pub equity: f64,
    /// Retained combo count for range queries, after dead-card filtering
    #[serde(default)]
    pub range_size: Option<usize>,
    /// Timestamp when the query ran (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_query_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSONL writer for [`QueryRecord`]s, one record per line, flushed per
/// write so a crashed session keeps everything already answered.
pub struct QueryLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl QueryLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_query_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &QueryRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
