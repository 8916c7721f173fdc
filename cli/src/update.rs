use crate::error::{Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::{CHANGELOG_FILE, Changelog, ReleaseNotes, UpdateReport};
use chrono::{Local, NaiveDate};
use std::path::Path;

pub fn execute(verbose: bool, dry_run: bool) -> Result<()> {
    let notes = ReleaseNotes::from_env();
    run(
        Path::new(CHANGELOG_FILE),
        &notes,
        Local::now().date_naive(),
        verbose,
        dry_run,
    )
}

fn run(
    path: &Path,
    notes: &ReleaseNotes,
    date: NaiveDate,
    verbose: bool,
    dry_run: bool,
) -> Result<()> {
    let mut progress = ProgressTracker::new("Changelog Update", verbose && !dry_run)
        .with_steps(vec![
            format!("Reading {}", path.display()),
            "Building release section".to_string(),
            format!("Writing {}", path.display()),
        ]);
    let changelog = Changelog::new(path);

    progress.start_step();
    let content = changelog
        .read()
        .with_context(|| "Changelog must exist before a release section can be added")?;
    progress.complete_step();

    progress.start_step();
    let report = changelog
        .render(&content, notes, date)
        .with_context(|| format!("Failed to build section for version '{}'", notes.version))?;
    progress.complete_step();

    report_diagnostics(&report, notes, verbose && !dry_run);

    if dry_run {
        progress.skip_step("dry run");
        print!("{}", report.content);
        return Ok(());
    }

    progress.start_step();
    changelog
        .write(&report.content)
        .with_context(|| "Changelog was not updated")?;
    progress.complete_step();

    progress.complete();
    if verbose {
        ui::success_message(&format!(
            "Added version '{}' to {}",
            notes.version,
            path.display()
        ));
    }

    Ok(())
}

fn report_diagnostics(report: &UpdateReport, notes: &ReleaseNotes, verbose: bool) {
    if notes.version.is_empty() {
        ui::warning_message("WORKFLOW_VERSION is not set; the section has an empty version");
    }
    if report.duplicate_version {
        ui::warning_message(&format!(
            "A section for version '{}' already exists; adding another",
            notes.version
        ));
    }
    if report.dropped_content() {
        if let Some(line) = &report.dropped_line {
            ui::warning_message(&format!("Replaced non-blank line 3: {line}"));
        }
    }
    if verbose {
        ui::info_message(&format!(
            "{} existing version section(s)",
            report.existing_sections
        ));
    }
}
