use crate::core::{RiskRating, SparePart};
use crate::formatting::{paint_token, FormattingConfig};
use crate::risk::{
    to_display_token, DashboardOverview, DisplayToken, FailureModeRow, RiskMatrix,
    RiskMatrixCell, RpnIssue, SummaryCounts, TokenColor,
};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_overview(&mut self, overview: &DashboardOverview) -> anyhow::Result<()>;
    fn write_matrix(&mut self, matrix: &RiskMatrix) -> anyhow::Result<()>;
    fn write_failure_modes(&mut self, rows: &[FailureModeRow]) -> anyhow::Result<()>;
    fn write_low_stock(&mut self, parts: &[&SparePart]) -> anyhow::Result<()>;
    /// Push buffered output to the destination, surfacing any I/O error.
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

fn display_rpn(rpn: Option<u32>) -> String {
    rpn.map(|r| r.to_string()).unwrap_or_else(|| "invalid".to_string())
}

fn display_rating(rating: Option<RiskRating>) -> &'static str {
    to_display_token(rating).label()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_overview(&mut self, overview: &DashboardOverview) -> anyhow::Result<()> {
        self.emit(overview)
    }

    fn write_matrix(&mut self, matrix: &RiskMatrix) -> anyhow::Result<()> {
        self.emit(matrix)
    }

    fn write_failure_modes(&mut self, rows: &[FailureModeRow]) -> anyhow::Result<()> {
        self.emit(rows)
    }

    fn write_low_stock(&mut self, parts: &[&SparePart]) -> anyhow::Result<()> {
        self.emit(parts)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary_section(&mut self, title: &str, summary: &SummaryCounts) -> anyhow::Result<()> {
        let levels = &summary.by_risk_level;
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Level | Count |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Critical | {} |", levels.critical)?;
        writeln!(self.writer, "| High | {} |", levels.high)?;
        writeln!(self.writer, "| Medium | {} |", levels.medium)?;
        writeln!(self.writer, "| Low | {} |", levels.low)?;
        writeln!(self.writer, "| Unclassified | {} |", levels.unclassified)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "High/critical: **{}** of {}",
            summary.high_critical_count, summary.total
        )?;
        writeln!(self.writer)?;

        if !summary.by_category.is_empty() {
            writeln!(self.writer, "| Category | Count |")?;
            writeln!(self.writer, "|----------|-------|")?;
            for (category, count) in &summary.by_category {
                writeln!(self.writer, "| {category} | {count} |")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_matrix_table(&mut self, matrix: &RiskMatrix) -> anyhow::Result<()> {
        writeln!(self.writer, "| Severity \\ Probability | 1 | 2 | 3 | 4 | 5 |")?;
        writeln!(self.writer, "|---|---|---|---|---|---|")?;
        for row in matrix.display_rows() {
            let cells: Vec<String> = row.iter().map(markdown_cell).collect();
            writeln!(self.writer, "| **{}** | {} |", row[0].severity, cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        if matrix.skipped_count() > 0 {
            writeln!(
                self.writer,
                "{} record(s) skipped with out-of-range factors:",
                matrix.skipped_count()
            )?;
            writeln!(self.writer)?;
            for skipped in matrix.skipped() {
                writeln!(self.writer, "- `{}`: {}", skipped.id, skipped.reason)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_rows_table(&mut self, rows: &[FailureModeRow]) -> anyhow::Result<()> {
        writeln!(self.writer, "| ID | Name | Category | S | P | D | RPN | RPN band | Rating |")?;
        writeln!(self.writer, "|----|------|----------|---|---|---|-----|----------|--------|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                row.id,
                row.name,
                row.category,
                row.severity,
                row.probability,
                row.detection.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                display_rpn(row.rpn),
                display_rating(row.rpn_band),
                row.token.label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_parts_table(&mut self, parts: &[&SparePart]) -> anyhow::Result<()> {
        if parts.is_empty() {
            writeln!(self.writer, "All spare parts are at or above minimum stock.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        writeln!(self.writer, "| ID | Material | Description | Stock | Min | Status |")?;
        writeln!(self.writer, "|----|----------|-------------|-------|-----|--------|")?;
        for part in parts {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                part.id, part.material_no, part.description, part.current_stock, part.min_stock, part.status
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn markdown_cell(cell: &RiskMatrixCell) -> String {
    if cell.is_empty() {
        "·".to_string()
    } else {
        format!("{} ({})", cell.count, cell.level)
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_overview(&mut self, overview: &DashboardOverview) -> anyhow::Result<()> {
        self.write_header("FMEA Risk Overview")?;
        self.write_summary_section("Failure Modes", &overview.failure_modes)?;
        self.write_summary_section("Components", &overview.components)?;
        self.write_summary_section("Equipment", &overview.equipment)?;

        writeln!(self.writer, "## Risk Matrix")?;
        writeln!(self.writer)?;
        self.write_matrix_table(&overview.matrix)?;

        writeln!(self.writer, "## Top Risks")?;
        writeln!(self.writer)?;
        self.write_rows_table(&overview.top_risks)?;

        writeln!(self.writer, "## Low Stock")?;
        writeln!(self.writer)?;
        let parts: Vec<&SparePart> = overview.low_stock.iter().collect();
        self.write_parts_table(&parts)?;

        if !overview.rpn_findings.is_empty() {
            writeln!(self.writer, "## RPN Findings")?;
            writeln!(self.writer)?;
            for finding in &overview.rpn_findings {
                writeln!(self.writer, "- `{}`: {}", finding.id, describe_issue(&finding.issue))?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &RiskMatrix) -> anyhow::Result<()> {
        self.write_header("Risk Matrix")?;
        self.write_matrix_table(matrix)
    }

    fn write_failure_modes(&mut self, rows: &[FailureModeRow]) -> anyhow::Result<()> {
        self.write_header("Failure Modes")?;
        self.write_rows_table(rows)
    }

    fn write_low_stock(&mut self, parts: &[&SparePart]) -> anyhow::Result<()> {
        self.write_header("Low Stock")?;
        self.write_parts_table(parts)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn describe_issue(issue: &RpnIssue) -> String {
    use crate::risk::RpnCheck;
    match issue {
        RpnIssue::Mismatch {
            check: RpnCheck::LegacyTwoFactor { stored, computed },
        } => format!("stored RPN {stored} is the 2-factor product; recomputed {computed}"),
        RpnIssue::Mismatch {
            check: RpnCheck::Stale { stored, computed },
        } => format!("stored RPN {stored} is stale; recomputed {computed}"),
        RpnIssue::Mismatch { check } => format!("{check:?}"),
        RpnIssue::InvalidFactors { reason } => reason.clone(),
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

pub struct TerminalWriter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            use_color: formatting.apply(),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.use_color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn token_cell(&self, token: DisplayToken, content: impl ToString) -> Cell {
        let cell = Cell::new(content);
        if self.use_color {
            cell.fg(table_color(token.color()))
        } else {
            cell
        }
    }

    fn heading(&mut self, text: &str) -> anyhow::Result<()> {
        let underline = "─".repeat(text.chars().count());
        writeln!(self.writer, "{text}")?;
        writeln!(self.writer, "{underline}")?;
        Ok(())
    }

    fn write_summary_block(&mut self, title: &str, summary: &SummaryCounts) -> anyhow::Result<()> {
        self.heading(title)?;
        let levels = &summary.by_risk_level;
        let mut table = self.table();
        table.set_header(vec!["Level", "Count"]);
        for (rating, count) in [
            (Some(RiskRating::Critical), levels.critical),
            (Some(RiskRating::High), levels.high),
            (Some(RiskRating::Medium), levels.medium),
            (Some(RiskRating::Low), levels.low),
            (None, levels.unclassified),
        ] {
            let token = to_display_token(rating);
            table.add_row(vec![self.token_cell(token, token.label()), Cell::new(count)]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "High/critical: {} of {}",
            summary.high_critical_count, summary.total
        )?;
        if !summary.by_category.is_empty() {
            let categories: Vec<String> = summary
                .by_category
                .iter()
                .map(|(category, count)| format!("{category}: {count}"))
                .collect();
            writeln!(self.writer, "By category: {}", categories.join(", "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_matrix_block(&mut self, matrix: &RiskMatrix) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["S \\ P", "1", "2", "3", "4", "5"]);
        for row in matrix.display_rows() {
            let mut cells = vec![Cell::new(row[0].severity)];
            for cell in row {
                let content = if cell.is_empty() {
                    "·".to_string()
                } else {
                    cell.count.to_string()
                };
                let token = if cell.is_empty() {
                    to_display_token(Some(RiskRating::Low))
                } else {
                    to_display_token(Some(cell.level))
                };
                cells.push(self.token_cell(token, content));
            }
            table.add_row(cells);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "Placed: {}  Skipped (invalid factors): {}",
            matrix.total_count(),
            matrix.skipped_count()
        )?;
        for skipped in matrix.skipped() {
            writeln!(self.writer, "  - {}: {}", skipped.id, skipped.reason)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rows_block(&mut self, rows: &[FailureModeRow]) -> anyhow::Result<()> {
        if rows.is_empty() {
            writeln!(self.writer, "No failure modes match.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        let mut table = self.table();
        table.set_header(vec![
            "ID", "Name", "Category", "S", "P", "D", "RPN", "RPN band", "Rating",
        ]);
        for row in rows {
            let band = to_display_token(row.rpn_band);
            table.add_row(vec![
                Cell::new(&row.id),
                Cell::new(&row.name),
                Cell::new(&row.category),
                Cell::new(row.severity),
                Cell::new(row.probability),
                Cell::new(row.detection.map(|d| d.to_string()).unwrap_or_else(|| "-".into())),
                Cell::new(display_rpn(row.rpn)),
                self.token_cell(band, band.label()),
                self.token_cell(row.token, row.token.label()),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_parts_block(&mut self, parts: &[&SparePart]) -> anyhow::Result<()> {
        if parts.is_empty() {
            writeln!(self.writer, "All spare parts are at or above minimum stock.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        let mut table = self.table();
        table.set_header(vec!["ID", "Material", "Description", "Stock", "Min", "Status"]);
        for part in parts {
            table.add_row(vec![
                Cell::new(&part.id),
                Cell::new(&part.material_no),
                Cell::new(&part.description),
                Cell::new(part.current_stock),
                Cell::new(part.min_stock),
                Cell::new(part.status),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

fn table_color(color: TokenColor) -> Color {
    match color {
        TokenColor::Green => Color::Green,
        TokenColor::Yellow => Color::Yellow,
        TokenColor::Red => Color::Red,
        TokenColor::Magenta => Color::Magenta,
        TokenColor::Grey => Color::Grey,
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_overview(&mut self, overview: &DashboardOverview) -> anyhow::Result<()> {
        self.write_summary_block("FAILURE MODES", &overview.failure_modes)?;
        self.write_summary_block("COMPONENTS", &overview.components)?;
        self.write_summary_block("EQUIPMENT", &overview.equipment)?;

        self.heading("RISK MATRIX")?;
        self.write_matrix_block(&overview.matrix)?;

        self.heading("TOP RISKS")?;
        self.write_rows_block(&overview.top_risks)?;

        self.heading("LOW STOCK")?;
        let parts: Vec<&SparePart> = overview.low_stock.iter().collect();
        self.write_parts_block(&parts)?;
        let status = overview.stock_status;
        writeln!(
            self.writer,
            "Parts by status: approved {}, pending {}, rejected {}",
            status.approved, status.pending, status.rejected
        )?;
        writeln!(self.writer)?;

        if !overview.rpn_findings.is_empty() {
            self.heading("RPN FINDINGS")?;
            for finding in &overview.rpn_findings {
                let line = format!("{}: {}", finding.id, describe_issue(&finding.issue));
                writeln!(self.writer, "  - {line}")?;
            }
            writeln!(self.writer)?;
        }

        let unknown = paint_token(DisplayToken::RiskUnknown, self.use_color);
        writeln!(
            self.writer,
            "{} record(s) {}",
            overview.unclassified_total(),
            unknown
        )?;
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &RiskMatrix) -> anyhow::Result<()> {
        self.heading("RISK MATRIX")?;
        self.write_matrix_block(matrix)
    }

    fn write_failure_modes(&mut self, rows: &[FailureModeRow]) -> anyhow::Result<()> {
        self.heading("FAILURE MODES")?;
        self.write_rows_block(rows)
    }

    fn write_low_stock(&mut self, parts: &[&SparePart]) -> anyhow::Result<()> {
        self.heading("LOW STOCK")?;
        self.write_parts_block(parts)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
