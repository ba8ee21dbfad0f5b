mod adapters;
mod application;
mod archive;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::apt::InMemoryPackageCache;
use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemReader;
use application::dto::{GraphFormat, MigrationRequest, RdepsRequest};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::use_cases::{AssessMigrationUseCase, GenerateRdepsUseCase, GRAPH_FILE_EXTENSION};
use clap::error::ErrorKind;
use clap::CommandFactory;
use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if !args.report && args.output.is_some() && args.pkgs.len() > 1 {
        Args::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--output takes a single package; use --destdir for several",
            )
            .exit();
    }

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config)?;

    let quiet = !args.report && settings.format == GraphFormat::Text;
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let reader = FileSystemReader::new(settings.lists_dir.clone(), &settings.mirror);
    if !quiet {
        eprintln!(
            "📦 Loading binary package cache ({}/{})...",
            settings.snapshot.distribution, settings.snapshot.architecture
        );
    }
    let cache = Arc::new(InMemoryPackageCache::load(&reader, &settings.snapshot)?);
    if !cache.skipped().is_empty() {
        eprintln!(
            "⚠️  Skipped {} malformed stanza(s) in the Packages indexes",
            cache.skipped().len()
        );
    }

    if args.report {
        assess_migration(&args, &settings, reader, cache, progress_reporter)
    } else {
        generate_graphs(&args, &settings, reader, cache, progress_reporter, quiet).await
    }
}

async fn generate_graphs(
    args: &Args,
    settings: &Settings,
    reader: FileSystemReader,
    cache: Arc<InMemoryPackageCache>,
    progress_reporter: StderrProgressReporter,
    quiet: bool,
) -> Result<ExitCode> {
    let use_case = GenerateRdepsUseCase::new(reader, cache, progress_reporter);

    // Text dumps carry no hyperlinks
    let package_urls =
        (settings.format != GraphFormat::Text).then(|| settings.package_url_template.clone());
    let request = RdepsRequest::new(args.pkgs.clone(), settings.snapshot.clone())
        .with_level(settings.level)
        .with_reference(settings.reference_distribution.clone())
        .with_jobs(settings.jobs)
        .with_package_urls(package_urls);

    let response = use_case.execute(request).await?;

    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create_graph(settings.format);
    for target_graph in &response.graphs {
        let content = formatter.format(&target_graph.graph, target_graph.decorations.as_ref())?;
        let presenter_type = match (&args.output, &args.destdir) {
            (Some(path), _) => PresenterType::File(path.clone()),
            (None, Some(destdir)) => PresenterType::Directory {
                destdir: destdir.clone(),
                name: target_graph.target.clone(),
                extension: formatter.file_extension().to_string(),
            },
            (None, None) => PresenterType::Stdout,
        };
        PresenterFactory::create(presenter_type)?.present(&content)?;
    }

    if let Some(destdir) = &args.destdir {
        if !quiet {
            eprintln!(
                "✅ Wrote {} graph(s) to {}",
                response.graphs.len(),
                destdir.display()
            );
        }
    }

    Ok(if response.has_failures() {
        ExitCode::PartialFailure
    } else {
        ExitCode::Success
    })
}

fn assess_migration(
    args: &Args,
    settings: &Settings,
    reader: FileSystemReader,
    cache: Arc<InMemoryPackageCache>,
    progress_reporter: StderrProgressReporter,
) -> Result<ExitCode> {
    let use_case = AssessMigrationUseCase::new(reader, cache, progress_reporter);
    let request = MigrationRequest::new(args.pkgs.clone(), settings.snapshot.clone())
        .with_level(settings.level)
        .with_graphs(args.destdir.is_some())
        .with_policy(settings.policy.clone());

    let response = use_case.execute(request)?;

    if let Some(destdir) = &args.destdir {
        let dot = FormatterFactory::create_graph(GraphFormat::Dot);
        for (binary, graph) in &response.graphs {
            let presenter = PresenterFactory::create(PresenterType::Directory {
                destdir: destdir.clone(),
                name: binary.clone(),
                extension: GRAPH_FILE_EXTENSION.to_string(),
            })?;
            presenter.present(&dot.format(graph, None)?)?;
        }
    }

    eprintln!("{}", FormatterFactory::report_progress_message(args.report_format));
    let formatter =
        FormatterFactory::create_report(args.report_format, Some(&settings.package_url_template));
    let content = formatter.format(&response.report)?;

    let presenter_type = match &args.output {
        Some(path) => PresenterType::File(path.clone()),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type)?.present(&content)?;

    Ok(ExitCode::Success)
}
