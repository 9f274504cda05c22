use std::{
    fmt::{Display, Formatter},
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use bon::bon;

use crate::{
    core::error::{Field, InputError},
    prelude::*,
};

pub const DEFAULT_REASON: &str = "Not specified";

pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Planned or reported power cut.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    area: String,
    start: String,
    end: String,
    reason: String,
}

#[bon]
impl ScheduleEntry {
    /// Validate and normalize a user submission.
    ///
    /// All fields are trimmed, the area is title-cased, and a blank reason becomes
    /// [`DEFAULT_REASON`].
    #[builder]
    pub fn new(
        area: &str,
        start: &str,
        end: &str,
        reason: Option<&str>,
    ) -> Result<Self, InputError> {
        let area = required(area, Field::Area)?;
        let start = required(start, Field::Start)?;
        let end = required(end, Field::End)?;
        let reason = reason.map(str::trim).filter(|reason| !reason.is_empty());
        Ok(Self {
            area: title_case(area),
            start: start.to_owned(),
            end: end.to_owned(),
            reason: reason.unwrap_or(DEFAULT_REASON).to_owned(),
        })
    }
}

impl ScheduleEntry {
    pub fn area(&self) -> &str {
        &self.area
    }
}

/// Renders the persisted record, without the trailing newline.
impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} - {} | {}", self.area, self.start, self.end, self.reason)
    }
}

fn required(value: &str, field: Field) -> Result<&str, InputError> {
    let value = value.trim();
    if value.is_empty() { Err(InputError::Validation { field }) } else { Ok(value) }
}

/// Upper-case every letter that follows an uncased character, and lower-case the other letters.
///
/// Letters without case, such as Devanagari, do not start a word. The full upper-case mapping
/// stands in for title case, so «ß» opening a word becomes «SS».
fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut after_cased = false;
    for character in text.chars() {
        if after_cased {
            output.extend(character.to_lowercase());
        } else {
            output.extend(character.to_uppercase());
        }
        after_cased = character.is_lowercase() || character.is_uppercase();
    }
    output
}

/// Append-only, line-oriented power-cut log.
///
/// One record per line, and records are never rewritten.
pub struct ScheduleLog {
    path: PathBuf,
}

impl ScheduleLog {
    /// Open the log, creating an empty file if it does not exist yet.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        Self::open_for_append(&path)?;
        debug!("opened");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate, normalize, and persist a user submission.
    ///
    /// On a validation failure, the returned error downcasts to [`InputError`], and the log is left
    /// untouched.
    pub fn submit(
        &self,
        area: &str,
        start: &str,
        end: &str,
        reason: Option<&str>,
    ) -> Result<ScheduleEntry> {
        let entry =
            ScheduleEntry::builder().area(area).start(start).end(end).maybe_reason(reason).build()?;
        self.append(&entry)?;
        Ok(entry)
    }

    #[instrument(skip_all, fields(area = entry.area()))]
    pub fn append(&self, entry: &ScheduleEntry) -> Result {
        let mut file = Self::open_for_append(&self.path)?;
        writeln!(file, "{entry}")
            .with_context(|| format!("failed to append to `{}`", self.path.display()))?;
        info!("saved the schedule");
        Ok(())
    }

    /// Read the last `limit` records, newest first.
    ///
    /// Blank lines are not records.
    #[instrument(skip_all, fields(limit))]
    pub fn recent_entries(&self, limit: usize) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let entries: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .rev()
            .take(limit)
            .map(str::to_owned)
            .collect();
        debug!(n_entries = entries.len(), "read");
        Ok(entries)
    }

    fn open_for_append(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))
    }
}
