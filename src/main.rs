use clap::Parser;
use part_compare::app::launch::{self, Launch};
use part_compare::core::ConfigProvider;
use part_compare::utils::error::ErrorSeverity;
use part_compare::utils::{logger, validation::Validate};
use part_compare::{CliConfig, CompareError, CompareSession, HttpPricingService};

fn exit_with(e: &CompareError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置 (日誌尚未初始化，直接輸出到 stderr)
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting part-compare");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let format = config.output_format();
    let service = HttpPricingService::from_config(&config);
    tracing::debug!("Pricing endpoint: {}", service.endpoint());
    let mut session = CompareSession::new(service);

    let startup = Launch {
        part_number: cli.part_number.clone(),
        volume: cli.volume.clone(),
        add: cli.add,
    };

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        if let Err(e) =
            launch::run_interactive(&mut session, &startup, stdin, stdout, format).await
        {
            exit_with(&e);
        }
    } else if startup.has_search() {
        let mut stdout = tokio::io::stdout();
        if let Err(e) = launch::run_once(&mut session, &startup, &mut stdout, format).await {
            exit_with(&e);
        }
    } else {
        eprintln!("❌ {}", CompareError::MissingSearchInput);
        eprintln!("💡 Pass --part-number and --volume, or --interactive");
        std::process::exit(4);
    }

    tracing::info!("✅ Done");
    Ok(())
}
