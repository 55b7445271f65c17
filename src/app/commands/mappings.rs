//! Mappings command: show how a mapping table parses.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, SkippedLine, TermEntry, TermTable};
use crate::ports::InputReader;

use super::input::InputText;

/// Parsed view of a mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingsReport {
    pub entries: Vec<TermEntry>,
    pub skipped: Vec<SkippedLine>,
    /// Lines that redefined an earlier ID.
    pub overridden: usize,
}

/// Execute the mappings command.
pub fn execute<R: InputReader>(
    ctx: &AppContext<R>,
    mappings: &InputText,
) -> Result<MappingsReport, AppError> {
    let table = TermTable::parse(&mappings.load(ctx.inputs())?);

    Ok(MappingsReport {
        entries: table.entries(),
        skipped: table.skipped().to_vec(),
        overridden: table.overridden(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkipReason;
    use crate::testing::MemoryInputReader;

    #[test]
    fn reports_entries_skips_and_overrides() {
        let ctx = AppContext::new(
            MemoryInputReader::new().with_file("m.txt", "1_monet\n1_manet\nfoo\n2_turner\n"),
        );

        let report = execute(&ctx, &InputText::File("m.txt".into())).unwrap();

        assert_eq!(
            report.entries,
            vec![
                TermEntry {
                    id: 1,
                    name: "manet".into(),
                },
                TermEntry {
                    id: 2,
                    name: "turner".into(),
                },
            ]
        );
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::MissingSeparator);
        assert_eq!(report.overridden, 1);
    }
}
