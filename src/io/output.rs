use std::io::Write;

use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::comparison::{MetricComparison, SessionComparison};
use crate::plan::TreatmentPlan;
use crate::routine::{RoutineStep, WeeklyStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_plan(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()>;
    fn write_comparison(&mut self, comparison: &SessionComparison) -> anyhow::Result<()>;

    /// Push buffered output to its destination, reporting any write failure
    fn flush(&mut self) -> anyhow::Result<()>;
}

fn format_reading(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn format_delta(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:+.1}"))
}

fn join_or_dash<T: AsRef<str>>(items: &[T]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
    }
}

/// Markdown table cells cannot contain a bare `|`
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_plan(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(plan)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &SessionComparison) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(comparison)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_plan(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()> {
        self.write_plan_header(plan)?;
        self.write_profile(plan)?;
        self.write_daily("Morning Routine", &plan.routine.am)?;
        self.write_daily("Evening Routine", &plan.routine.pm)?;
        self.write_weekly(&plan.routine.weekly)?;
        self.write_reasoning(plan)?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &SessionComparison) -> anyhow::Result<()> {
        writeln!(self.writer, "# Session Comparison")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Comparing {} with {}.",
            comparison.previous_at.format("%Y-%m-%d"),
            comparison.latest_at.format("%Y-%m-%d")
        )?;
        writeln!(self.writer)?;

        if !comparison.metrics.is_empty() {
            writeln!(self.writer, "## Metrics")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Metric | Previous | Latest | Delta |")?;
            writeln!(self.writer, "|--------|----------|--------|-------|")?;
            for metric in &comparison.metrics {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    metric.key,
                    format_reading(metric.previous),
                    format_reading(metric.latest),
                    format_delta(metric.delta)
                )?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "## Notes")?;
        writeln!(self.writer)?;
        for note in &comparison.notes {
            writeln!(self.writer, "- {note}")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_plan_header(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "# Skincare Plan")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            plan.skin_profile.analysis_timestamp
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_profile(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()> {
        let profile = &plan.skin_profile;
        let concerns: Vec<&str> = profile.main_concerns.iter().map(|c| c.as_str()).collect();

        writeln!(self.writer, "## Skin Profile")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Skin type | {} |", profile.skin_type)?;
        writeln!(
            self.writer,
            "| Main concerns | {} |",
            escape_cell(&join_or_dash(&concerns))
        )?;
        writeln!(
            self.writer,
            "| Irritation score | {:.2} |",
            profile.irritation_score
        )?;
        writeln!(
            self.writer,
            "| Restrictions | {} |",
            escape_cell(&join_or_dash(&plan.explainability.restrictions_applied))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_daily(&mut self, title: &str, steps: &[RoutineStep]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for step in steps {
            writeln!(self.writer, "{}. {}", step.step_order, step.instructions)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_weekly(&mut self, steps: &[WeeklyStep]) -> anyhow::Result<()> {
        if steps.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Weekly Treatments")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Day | When | Instructions |")?;
        writeln!(self.writer, "|-----|------|--------------|")?;
        for step in steps {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                step.day_of_week,
                step.when,
                escape_cell(&step.instructions)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_reasoning(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "## Why This Plan")?;
        writeln!(self.writer)?;
        for sentence in &plan.explainability.reasoning {
            writeln!(self.writer, "- {sentence}")?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Confidence:** {:.2}",
            plan.explainability.confidence_score
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn print_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_daily(&mut self, title: &str, steps: &[RoutineStep]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold())?;
        for step in steps {
            writeln!(
                self.writer,
                "  {}. {} {}",
                step.step_order,
                step.instructions,
                format!("[{}]", step.kind.label()).dimmed()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_weekly(&mut self, steps: &[WeeklyStep]) -> anyhow::Result<()> {
        if steps.is_empty() {
            return Ok(());
        }
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Day", "When", "Instructions"]);
        for step in steps {
            table.add_row(vec![
                step.day_of_week.name().to_string(),
                step.when.to_string(),
                step.instructions.clone(),
            ]);
        }
        writeln!(self.writer, "{}", "Weekly Treatments".bold())?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn metrics_table(metrics: &[MetricComparison]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Metric", "Previous", "Latest", "Delta"]);
        for metric in metrics {
            table.add_row(vec![
                metric.key.to_string(),
                format_reading(metric.previous),
                format_reading(metric.latest),
                format_delta(metric.delta),
            ]);
        }
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_plan(&mut self, plan: &TreatmentPlan) -> anyhow::Result<()> {
        let profile = &plan.skin_profile;
        let explanation = &plan.explainability;
        let concerns: Vec<&str> = profile.main_concerns.iter().map(|c| c.as_str()).collect();

        self.print_header("Skincare Plan")?;
        writeln!(self.writer, "  Skin type:   {}", profile.skin_type.to_string().bold())?;
        writeln!(self.writer, "  Concerns:    {}", join_or_dash(&concerns))?;
        writeln!(
            self.writer,
            "  Irritation:  {:.2}",
            profile.irritation_score
        )?;
        if !explanation.restrictions_applied.is_empty() {
            writeln!(
                self.writer,
                "  Restrictions: {}",
                explanation.restrictions_applied.join(", ").yellow()
            )?;
        }
        writeln!(self.writer)?;

        self.print_daily("Morning", &plan.routine.am)?;
        self.print_daily("Evening", &plan.routine.pm)?;
        self.print_weekly(&plan.routine.weekly)?;

        writeln!(self.writer, "{}", "Why this plan".bold())?;
        for sentence in &explanation.reasoning {
            writeln!(self.writer, "  - {sentence}")?;
        }
        let confidence = format!("{:.2}", explanation.confidence_score);
        let confidence = if explanation.confidence_score >= 0.85 {
            confidence.green()
        } else {
            confidence.yellow()
        };
        writeln!(self.writer, "  Confidence: {confidence}")?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &SessionComparison) -> anyhow::Result<()> {
        self.print_header("Session Comparison")?;
        writeln!(
            self.writer,
            "  {} -> {}",
            comparison.previous_at.format("%Y-%m-%d %H:%M"),
            comparison.latest_at.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(self.writer)?;

        if !comparison.metrics.is_empty() {
            writeln!(self.writer, "{}", Self::metrics_table(&comparison.metrics))?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", "Notes".bold())?;
        for note in &comparison.notes {
            writeln!(self.writer, "  - {note}")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
