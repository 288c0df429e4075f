use clap::Parser;
use roadmap_client::core::{ConfigProvider, OutputContainer};
use roadmap_client::utils::error::ErrorKind;
use roadmap_client::utils::{logger, validation::Validate};
use roadmap_client::{
    CliConfig, FileContainer, HttpRoadmapService, MemoryContainer, RoadmapSubmitter, StaticForm,
    SubmitEvent, SubmitOutcome, TomlConfig,
};

async fn run<C: ConfigProvider + Validate>(cli: &CliConfig, settings: &C) -> i32 {
    // Validate settings
    if let Err(e) = settings.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.kind(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return e.kind().exit_code();
    }

    // Build the HTTP client
    let service = match HttpRoadmapService::from_config(settings) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            return e.kind().exit_code();
        }
    };
    tracing::info!("Roadmap endpoint: {}", service.endpoint());

    let submitter = RoadmapSubmitter::new(service)
        .with_field_ids(settings.field_ids().clone())
        .with_style(settings.render_style())
        .with_timeout(settings.request_timeout());

    // Form values come from the command line
    let form = StaticForm::with_ids(
        settings.field_ids(),
        &cli.goal,
        &cli.learning_style,
        &cli.daily_time,
    );

    // Without --output the fragment is printed
    let memory = MemoryContainer::new();
    let file = cli.output.as_ref().map(FileContainer::new);
    let container: &dyn OutputContainer = match &file {
        Some(file) => file,
        None => &memory,
    };

    // One submit cycle
    let mut event = SubmitEvent::new();
    let outcome = submitter.on_submit(&mut event, &form, container).await;

    match &file {
        Some(file) => tracing::info!("📁 Output saved to: {}", file.path().display()),
        None => println!("{}", memory.contents()),
    }

    match outcome {
        SubmitOutcome::Rendered { steps } => {
            tracing::info!("✅ Rendered roadmap with {} steps", steps);
            0
        }
        SubmitOutcome::Failed(kind) => {
            tracing::error!("❌ Roadmap submission failed ({:?})", kind);
            kind.exit_code()
        }
        SubmitOutcome::Ignored => ErrorKind::Busy.exit_code(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logging
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting roadmap client");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A TOML file, if given, replaces the CLI service/render settings
    let code = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let settings = match TomlConfig::from_file(path) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(e.kind().exit_code());
                }
            };
            run(&cli, &settings).await
        }
        None => run(&cli, &cli).await,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
