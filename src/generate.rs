use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use suntable_dataset::DatasetGenerator;
use suntable_store::{InsertTemplate, SqliteSink, WriteReport, open_store, persist};

use crate::cli::Cli;
use crate::config::SuntableConfig;
use crate::convert;

/// Run the full generation pipeline.
///
/// Per-day failures are logged and summarised but do not fail the run;
/// only setup errors and failed transactions do.
pub fn run(cli: &Cli) -> Result<WriteReport> {
    let _cmd = info_span!("generate").entered();

    // Step 1: Open the store and read the insert template
    let conn = open_store(&cli.store_path)
        .with_context(|| format!("failed to open store: {}", cli.store_path.display()))?;
    let template = InsertTemplate::from_file(&cli.template_file).with_context(|| {
        format!(
            "failed to load insert template: {}",
            cli.template_file.display()
        )
    })?;

    // Step 2: Merge config file and CLI overrides
    let config = match &cli.config {
        Some(path) => SuntableConfig::from_file(path)?,
        None => SuntableConfig::default(),
    };
    let generator_config = convert::build_generator_config(&config, cli)?;

    // Step 3: Prepare the sink and the day generator
    let mut sink =
        SqliteSink::new(&conn, &template).context("failed to prepare insert template")?;
    let generator =
        DatasetGenerator::new(generator_config).context("invalid generation settings")?;

    info!(
        from = cli.from_year,
        until = cli.until_year,
        utc_offset = cli.utc_offset,
        latitude = generator.config().location().latitude(),
        longitude = generator.config().location().longitude(),
        days = generator.day_count(),
        "generating sun times"
    );

    // Step 4: Write year by year
    let report = persist(&mut sink, &generator).context("failed to write sun times")?;

    if report.is_complete() {
        info!(rows = report.written(), "all days written");
    } else {
        warn!(
            rows = report.written(),
            failed = report.failed().len(),
            "some days were not written"
        );
    }

    Ok(report)
}
