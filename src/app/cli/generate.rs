use std::path::PathBuf;

use crate::domain::{AppError, GenerationReport, WriteOutcome, collect_fields, parse_field_count};

use super::prompt_text;

const NAME_PROMPT: &str = "What are you storing in the DB?";
const COUNT_PROMPT: &str = "How many items do you need in each document?";
const FIELD_PROMPT: &str = "Name of the item you want in the document?";

pub(super) fn run_generate(
    name: Option<String>,
    fields: Vec<String>,
    dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<i32, AppError> {
    let (name, fields) = match resolve_inputs(name, fields) {
        Ok(inputs) => inputs,
        Err(AppError::Cancelled) => return Ok(0),
        Err(err) => return Err(err),
    };

    let report = match dir {
        Some(dir) => crate::app::api::generate_at(dir, &name, &fields, config.as_deref())?,
        None => crate::app::api::generate(&name, &fields, config.as_deref())?,
    };

    print_report(&report);
    Ok(if report.has_failures() { 1 } else { 0 })
}

fn resolve_inputs(
    name: Option<String>,
    fields: Vec<String>,
) -> Result<(String, Vec<String>), AppError> {
    let name = match name {
        Some(value) => value,
        None => prompt_text(NAME_PROMPT)?,
    };

    if !fields.is_empty() {
        return Ok((name, fields));
    }

    let count = parse_field_count(&prompt_text(COUNT_PROMPT)?)?;
    let fields = collect_fields(count, |_| prompt_text(FIELD_PROMPT))?;
    Ok((name, fields))
}

fn print_report(report: &GenerationReport) {
    for artifact in report.artifacts() {
        match &artifact.outcome {
            WriteOutcome::Created => println!("✅ Created {}", artifact.path),
            WriteOutcome::SkippedExisting => {
                println!("⏭️  Skipped {} (already exists)", artifact.path)
            }
            WriteOutcome::Appended => {
                println!("➕ Appended {} mount to {}", report.resource(), artifact.path)
            }
            WriteOutcome::Unchanged => {
                println!("⏭️  Skipped {} ({} already mounted)", artifact.path, report.resource())
            }
            WriteOutcome::Failed(reason) => println!("❌ Failed {}: {}", artifact.path, reason),
        }
    }

    let failed = report.failed().len();
    if failed == 0 {
        println!(
            "✅ Scaffolded {} ({} created, {} skipped)",
            report.resource(),
            report.created().len(),
            report.skipped().len()
        );
    } else {
        println!("❌ Scaffolded {} with {} failed artifact(s)", report.resource(), failed);
    }
}
