use clap::Parser;
use portfolio_showcase::config::toml_config::{LogFormat, TomlConfig};
use portfolio_showcase::config::Command;
use portfolio_showcase::domain::content::{fallback_showcase, Profile};
use portfolio_showcase::utils::error::ErrorSeverity;
use portfolio_showcase::utils::{logger, validation::Validate};
use portfolio_showcase::{
    CliConfig, ContactForm, ContactState, ContactSubmitter, HttpBackend, PortfolioError,
    PortfolioPage, Settings, ShowcaseLoader, SubmitAttempt,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let file = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || file.as_ref().is_some_and(TomlConfig::verbose);
    let json_logs = cli.json_logs || file.as_ref().map(TomlConfig::log_format) == Some(LogFormat::Json);
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting portfolio CLI");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli, file.as_ref()).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

async fn run(cli: &CliConfig, file: Option<&TomlConfig>) -> Result<(), PortfolioError> {
    let settings = Settings::resolve(cli.backend_url.as_deref(), cli.timeout_seconds, file);

    // 驗證配置
    if let Some(file) = file {
        file.validate()?;
    }
    settings.validate()?;
    tracing::info!("Backend origin: {}", settings.backend_origin);

    let backend = HttpBackend::new(&settings)?;

    match &cli.command {
        Command::Show { offline } => {
            let showcase = if *offline {
                tracing::info!("Offline mode: using built-in showcase content");
                fallback_showcase()
            } else {
                ShowcaseLoader::new(backend).load(fallback_showcase()).await
            };
            let page = PortfolioPage::new(Profile::default(), showcase);
            print!("{}", page.render(&ContactState::new()));
            Ok(())
        }
        Command::Contact {
            name,
            phone,
            email,
            remarks,
        } => {
            let state = ContactState::new().with_form(ContactForm {
                name: name.clone(),
                phone: phone.clone(),
                email: email.clone(),
                remarks: remarks.clone(),
            });
            let rejected = matches!(state.request_submit(), SubmitAttempt::Rejected(_));
            let result = ContactSubmitter::new(backend).submit(&state).await;

            match (result.confirmation(), result.error()) {
                (Some(confirmation), _) => {
                    println!("✅ {}", confirmation);
                    Ok(())
                }
                (None, Some(message)) if rejected => Err(PortfolioError::validation(message)),
                (None, Some(message)) => Err(PortfolioError::Delivery {
                    message: message.to_string(),
                }),
                (None, None) => Ok(()),
            }
        }
    }
}

fn exit_code(e: &PortfolioError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 4,
    }
}
