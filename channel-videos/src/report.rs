//! Where exported videos go.

use crate::enumerator::VideoRecord;
use eyre::Context;
use jiff::Timestamp;
use jiff::civil::Date;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Longest sheet name a workbook accepts, in characters.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

pub const COLUMNS: [&str; 5] = ["title", "published", "duration", "views", "url"];

/// Receives the videos of each exported channel.
pub trait ReportSink {
    /// Adds one channel's videos under `name`.
    fn emit(&mut self, name: &str, videos: &[VideoRecord]) -> eyre::Result<()>;

    /// Writes out everything emitted so far.
    fn finish(&mut self) -> impl Future<Output = eyre::Result<()>>;
}

/// A workbook-shaped JSON report: one sheet per channel, one row per video.
#[derive(Debug)]
pub struct JsonWorkbook {
    path: PathBuf,
    sheets: Vec<Sheet>,
    sheet_names: HashSet<String>,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    generated_at: Timestamp,
    sheets: &'a [Sheet],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Sheet {
    name: String,
    columns: [&'static str; 5],
    rows: Vec<Row>,
}

/// `(title, published, duration, views, url)`, serialized as an array.
type Row = (String, Date, String, u64, String);

impl JsonWorkbook {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheets: Vec::new(),
            sheet_names: HashSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turns a display name into a sheet name that is valid and not yet taken.
    ///
    /// Characters workbooks reject (`[]:*?/\`) become `_`, the name is cut to
    /// [`MAX_SHEET_NAME_CHARS`], and a repeated name gets ` (2)`, ` (3)`, … appended
    /// within that limit.
    fn sheet_name(&self, display_name: &str) -> String {
        let cleaned: String = display_name
            .trim()
            .chars()
            .map(|c| match c {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                c => c,
            })
            .collect();
        let cleaned = if cleaned.is_empty() {
            "Sheet".to_string()
        } else {
            cleaned
        };

        let base = truncate_chars(&cleaned, MAX_SHEET_NAME_CHARS);
        if !self.sheet_names.contains(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let suffix = format!(" ({n})");
            let room = MAX_SHEET_NAME_CHARS - suffix.chars().count();
            let candidate = format!("{}{}", truncate_chars(&cleaned, room), suffix);
            if !self.sheet_names.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

impl ReportSink for JsonWorkbook {
    fn emit(&mut self, name: &str, videos: &[VideoRecord]) -> eyre::Result<()> {
        let sheet_name = self.sheet_name(name);
        tracing::debug!(name, sheet = sheet_name, rows = videos.len(), "adding sheet");

        let rows = videos
            .iter()
            .map(|v| {
                (
                    v.title.clone(),
                    v.published_date,
                    v.duration.clone(),
                    v.view_count,
                    v.url.clone(),
                )
            })
            .collect();
        self.sheet_names.insert(sheet_name.clone());
        self.sheets.push(Sheet {
            name: sheet_name,
            columns: COLUMNS,
            rows,
        });
        Ok(())
    }

    async fn finish(&mut self) -> eyre::Result<()> {
        let document = Document {
            generated_at: Timestamp::now(),
            sheets: &self.sheets,
        };
        let json = serde_json::to_string_pretty(&document).context("serialize report")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("write report {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), sheets = self.sheets.len(), "wrote report");
        Ok(())
    }
}
