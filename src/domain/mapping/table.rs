use std::collections::HashMap;

use serde::Serialize;

/// Separator between the ID and the name on a mapping line.
const ID_NAME_SEPARATOR: char = '_';

/// One `ID_Name` entry of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermEntry {
    pub id: i64,
    pub name: String,
}

/// A mapping line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the raw mapping text.
    pub line_number: usize,
    /// Trimmed line content.
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingSeparator,
    InvalidId,
}

impl SkipReason {
    pub fn label(self) -> &'static str {
        match self {
            SkipReason::MissingSeparator => "no '_' separator",
            SkipReason::InvalidId => "id is not an integer",
        }
    }
}

/// ID to name lookup parsed from `ID_Name` lines.
///
/// Duplicate IDs resolve to the last line that defines them. Listing order
/// follows the first appearance of each ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTable {
    names: HashMap<i64, String>,
    order: Vec<i64>,
    skipped: Vec<SkippedLine>,
    overridden: usize,
}

impl TermTable {
    /// Parse a multi-line mapping source. Never fails; bad lines are recorded.
    pub fn parse(raw: &str) -> Self {
        let mut table = TermTable::default();

        for (index, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(entry) => table.insert(entry),
                Err(reason) => {
                    tracing::warn!(
                        line = index + 1,
                        content = line,
                        reason = reason.label(),
                        "skipping mapping line"
                    );
                    table.skipped.push(SkippedLine {
                        line_number: index + 1,
                        content: line.to_string(),
                        reason,
                    });
                }
            }
        }

        table
    }

    fn insert(&mut self, entry: TermEntry) {
        match self.names.insert(entry.id, entry.name) {
            Some(_) => self.overridden += 1,
            None => self.order.push(entry.id),
        }
    }

    /// Look up the name mapped to `id`.
    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in first-appearance order, each carrying its final name.
    pub fn entries(&self) -> Vec<TermEntry> {
        self.order
            .iter()
            .filter_map(|id| {
                self.names.get(id).map(|name| TermEntry {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect()
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Number of lines whose ID was already defined earlier.
    pub fn overridden(&self) -> usize {
        self.overridden
    }
}

fn parse_line(line: &str) -> Result<TermEntry, SkipReason> {
    let (id, name) = line.split_once(ID_NAME_SEPARATOR).ok_or(SkipReason::MissingSeparator)?;
    let id = id.trim().parse::<i64>().map_err(|_| SkipReason::InvalidId)?;
    Ok(TermEntry {
        id,
        name: name.trim().to_string(),
    })
}
