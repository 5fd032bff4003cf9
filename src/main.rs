use clap::Parser;
use marina::app::inventory;
use marina::utils::error::{ErrorSeverity, MarinaError};
use marina::utils::{logger, validation::Validate};
use marina::{BillingEngine, BoatStore, CliConfig, FileStore, MarinaConfig, Session};

fn main() {
    let args = CliConfig::parse();

    // 載入設定檔 (若有指定)
    let mut config = match &args.config {
        Some(path) => match MarinaConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => MarinaConfig::default(),
    };

    // 命令列覆蓋設定
    config.apply_overrides(args.file.clone(), args.capacity);

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.json_logs() {
        logger::init_json_logger(args.verbose, level);
    } else {
        logger::init_cli_logger(args.verbose, level);
    }
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args, &config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(args: &CliConfig, config: &MarinaConfig) -> Result<(), MarinaError> {
    config.validate()?;
    let data_file = config.data_file()?;

    let store = FileStore::new(data_file);
    let (repository, report) = store.load(config.capacity())?;
    if !report.skipped.is_empty() {
        tracing::warn!(
            "⚠️ {} rows in '{}' were skipped",
            report.skipped.len(),
            data_file
        );
    }

    if args.inventory_json {
        println!("{}", inventory::inventory_json(&repository)?);
        return Ok(());
    }

    let mut session = Session::new(
        config.marina_name(),
        repository,
        BillingEngine::new(config.rates),
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = session.run(&mut stdin.lock(), &mut stdout.lock());

    // 不論選單是否正常結束，都要寫回檔案
    store.save(session.repository())?;
    tracing::info!("📁 Marina saved to: {}", store.path().display());

    outcome
}
