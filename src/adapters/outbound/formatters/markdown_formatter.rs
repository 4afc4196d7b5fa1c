use crate::analytics::domain::{OperatingSystem, Window};
use crate::analytics::services::DependencyTreeWalker;
use crate::application::dto::{AnalyticsReport, EdgeReport, InstallReport, MatrixReport, TreeReport};
use crate::application::read_models::{InstallTrendPanel, RequestRatioPanel, PANEL_SIZE};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter producing human-readable tables
///
/// Long listings (casks, build errors, popularity) are cut to the top
/// entries; the JSON output carries the full data.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn formula_link(name: &str) -> String {
        format!(
            "[{}](https://formulae.brew.sh/formula/{})",
            Self::escape_markdown_table_cell(name),
            urlencoding::encode(name)
        )
    }

    fn os_title(os: OperatingSystem) -> &'static str {
        match os {
            OperatingSystem::Macos => "macOS",
            OperatingSystem::Linux => "Linux",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &AnalyticsReport) {
        let metadata = report.metadata();
        output.push_str(&format!("# {}\n\n", report.title()));
        output.push_str(&format!(
            "_Generated {} by {} {}_\n\n",
            metadata.generated_at(),
            metadata.tool_name(),
            metadata.tool_version()
        ));
    }

    fn render_trend_panel(&self, output: &mut String, panel: &InstallTrendPanel) {
        output.push_str(&format!(
            "### Top {} {} Formula Installs\n\n",
            PANEL_SIZE,
            Self::os_title(panel.operating_system)
        ));
        if panel.points.is_empty() {
            output.push_str("*No install data*\n\n");
            return;
        }
        output.push_str("| Formula | Window | Installs | Installs per Day |\n");
        output.push_str("|---------|--------|---------:|-----------------:|\n");
        for point in &panel.points {
            output.push_str(&format!(
                "| {} | {} | {} | {:.1} |\n",
                Self::formula_link(&point.package_name),
                point.window,
                point.count_regular,
                point.installs_per_day
            ));
        }
        output.push('\n');
    }

    fn render_ratio_panel(&self, output: &mut String, panel: &RequestRatioPanel) {
        output.push_str(&format!(
            "### Install on Request Ratio: {}\n\n",
            Self::os_title(panel.operating_system)
        ));
        if panel.formulas.is_empty() {
            output.push_str("*No install data*\n\n");
            return;
        }

        output.push_str("| Formula |");
        for series in &panel.series {
            output.push_str(&format!(" {} |", series.window));
        }
        output.push_str("\n|---------|");
        output.push_str(&"------:|".repeat(panel.series.len()));
        output.push('\n');

        for (idx, formula) in panel.formulas.iter().enumerate() {
            output.push_str(&format!("| {} |", Self::formula_link(formula)));
            for series in &panel.series {
                match series.values.get(idx).copied().flatten() {
                    Some(pct) => output.push_str(&format!(" {:.1}% |", pct)),
                    None => output.push_str(" - |"),
                }
            }
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_installs(&self, output: &mut String, report: &InstallReport) {
        output.push_str(&format!(
            "{} formula rows joined across {} operating systems and {} windows.\n\n",
            report.rows.len(),
            OperatingSystem::ALL.len(),
            Window::ALL.len()
        ));

        output.push_str("## Install Trends\n\n");
        for panel in &report.trend_panels {
            self.render_trend_panel(output, panel);
        }

        output.push_str("## Install on Request\n\n");
        for panel in &report.request_ratio_panels {
            self.render_ratio_panel(output, panel);
        }

        output.push_str("## Cask Installs\n\n");
        output.push_str("| Cask | Window | Installs | Percent |\n");
        output.push_str("|------|--------|---------:|--------:|\n");
        for window in Window::ALL {
            for cask in report
                .cask_installs
                .iter()
                .filter(|c| c.window == window)
                .take(PANEL_SIZE)
            {
                output.push_str(&format!(
                    "| {} | {} | {} | {:.2} |\n",
                    Self::escape_markdown_table_cell(&cask.cask),
                    cask.window,
                    cask.raw_count,
                    cask.percent
                ));
            }
        }
        output.push('\n');

        output.push_str("## Build Errors\n\n");
        output.push_str("| Formula | OS | Window | Errors | Percent |\n");
        output.push_str("|---------|----|--------|-------:|--------:|\n");
        for os in OperatingSystem::ALL {
            for window in Window::ALL {
                for record in report
                    .build_errors
                    .iter()
                    .filter(|r| r.operating_system == os && r.window == window)
                    .take(PANEL_SIZE)
                {
                    output.push_str(&format!(
                        "| {} | {} | {} | {} | {:.2} |\n",
                        Self::escape_markdown_table_cell(&record.formula),
                        Self::os_title(os),
                        window,
                        record.raw_count,
                        record.percent
                    ));
                }
            }
        }
        output.push('\n');
    }

    fn render_edges(&self, output: &mut String, report: &EdgeReport) {
        output.push_str(&format!(
            "{} edges in the `{}` relation.\n\n",
            report.edges.len(),
            report.relation
        ));

        output.push_str("## Most Depended Upon\n\n");
        if report.popularity.is_empty() {
            output.push_str("*No dependencies*\n\n");
        } else {
            output.push_str("| Formula | Dependents |\n");
            output.push_str("|---------|-----------:|\n");
            for entry in report.popularity.iter().take(PANEL_SIZE) {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::formula_link(&entry.name),
                    entry.dependents
                ));
            }
            output.push('\n');
        }

        if !report.unavailable.is_empty() {
            output.push_str("## Unavailable Metadata\n\n");
            output.push_str(
                "These formulas appear in the analytics but their metadata could not be fetched.\n\n",
            );
            for name in &report.unavailable {
                output.push_str(&format!("- {}\n", name));
            }
            output.push('\n');
        }
    }

    fn render_tree(&self, output: &mut String, report: &TreeReport) {
        output.push_str(&format!(
            "{} nodes, {} levels deep, `{}` relation.\n\n",
            report.node_count, report.depth, report.relation
        ));
        output.push_str("```text\n");
        output.push_str(&DependencyTreeWalker::render_indented(&report.tree));
        output.push_str("```\n");
    }

    fn render_matrix(&self, output: &mut String, report: &MatrixReport) {
        let matrix = &report.matrix;
        if matrix.size() == 0 {
            output.push_str("*No dependencies*\n");
            return;
        }

        output.push_str(&format!(
            "Row formula depends on column formula (`■`), {} of {} cells set.\n\n",
            matrix.present_count(),
            matrix.size() * matrix.size()
        ));

        output.push_str("| # | Formula |");
        for col in 1..=matrix.size() {
            output.push_str(&format!(" {} |", col));
        }
        output.push_str("\n|--:|---------|");
        output.push_str(&":-:|".repeat(matrix.size()));
        output.push('\n');

        for (idx, (label, row)) in matrix.labels().iter().zip(matrix.grid()).enumerate() {
            output.push_str(&format!(
                "| {} | {} |",
                idx + 1,
                Self::escape_markdown_table_cell(label)
            ));
            for cell in row {
                output.push_str(if cell.is_present() { " ■ |" } else { "  |" });
            }
            output.push('\n');
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &AnalyticsReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);

        match report {
            AnalyticsReport::Installs(r) => self.render_installs(&mut output, r),
            AnalyticsReport::Edges(r) => self.render_edges(&mut output, r),
            AnalyticsReport::Tree(r) => self.render_tree(&mut output, r),
            AnalyticsReport::Matrix(r) => self.render_matrix(&mut output, r),
        }

        Ok(output)
    }
}
