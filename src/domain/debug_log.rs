//! Human-readable resolution trace returned as `debug_info`.

use super::ids::EffectiveId;
use super::mapping::TermTable;

#[derive(Debug, Clone, Default)]
pub struct DebugLog {
    lines: Vec<String>,
}

impl DebugLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn mapping(&mut self, table: &TermTable) {
        self.push(format!(
            "mapping: {} entries, {} skipped, {} overridden",
            table.len(),
            table.skipped().len(),
            table.overridden()
        ));
        for entry in table.entries() {
            self.push(format!("  mapped {}_{}", entry.id, entry.name));
        }
        for skipped in table.skipped() {
            self.push(format!(
                "  skipped line {} {:?}: {}",
                skipped.line_number,
                skipped.content,
                skipped.reason.label()
            ));
        }
    }

    pub fn effective_ids(&mut self, ids: &[EffectiveId]) {
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        self.push(format!("effective_ids=[{}]", rendered.join(", ")));
    }

    pub fn slot(&mut self, index: usize, id: &EffectiveId, name: &str, before: &str, after: &str) {
        self.push(format!("slot[{}] id={} name={}", index, id, name));
        self.push(format!("  before: {}", before));
        self.push(format!("  after:  {}", after));
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
