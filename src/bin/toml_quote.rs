use anyhow::Context;
use clap::Parser;
use tails_calc::core::InputSource;
use tails_calc::utils::{logger, validation::Validate};
use tails_calc::{CalcError, Calculator, ReportSink, ScenarioConfig};

#[derive(Parser)]
#[command(name = "toml-quote")]
#[command(about = "Price a pet-care plan described in a TOML scenario file")]
struct Args {
    /// Path to TOML scenario file
    #[arg(short, long, default_value = "quote.toml")]
    config: String,

    /// Override output format from the scenario (text, csv, tsv, json)
    #[arg(short, long)]
    format: Option<String>,

    /// Override strict mode from the scenario
    #[arg(long)]
    strict: Option<bool>,

    /// Dry run - show the resolved inputs without pricing them
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn fail(e: &CalcError) -> ! {
    tracing::error!(
        "❌ Quote failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading scenario from: {}", args.config);

    // 載入 TOML 情境
    let mut config = match ScenarioConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(strict) = args.strict {
        config.set_strict(strict);
        tracing::info!("🔧 Strict mode overridden to: {}", strict);
    }
    if let Some(format) = &args.format {
        config.set_format(format);
        tracing::info!("🔧 Output format overridden to: {}", format);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - inputs are resolved but not priced");
        if let Err(e) = perform_dry_run(&config) {
            fail(&e);
        }
        return Ok(());
    }

    let format = match config.output_format() {
        Ok(format) => format,
        Err(e) => fail(&e),
    };
    let sink = ReportSink::from_option(config.output_path());

    let calculator = Calculator::new(config, format.presenter());
    let report = match calculator.run() {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    sink.write(&report)
        .with_context(|| format!("failed to write report to {}", sink.describe()))?;

    Ok(())
}

fn perform_dry_run(config: &ScenarioConfig) -> Result<(), CalcError> {
    let (plan, extras) = config.collect()?;

    println!("🔍 Dry Run Analysis:");
    println!();
    println!(
        "📋 Plan: {} ({} month(s), {}% off)",
        plan.plan_type,
        plan.plan_type.months(),
        plan.plan_type.discount_percent()
    );
    println!("  Daily walks: {}", plan.daily_walk_count);
    println!("  Walks per week: {}", plan.walks_per_week);
    println!("  Grooming per month: {}", plan.grooming_per_month);
    println!("  Vet checkups per month: {}", plan.vet_checkups_per_month);
    println!("  Training per month: {}", plan.training_per_month);
    println!("  Customers: {}", plan.customer_count);

    println!();
    println!("🛒 A La Carte:");
    println!("  Walks: {}", extras.walks);
    println!("  Grooming: {}", extras.grooming);
    println!("  Vet checkups: {}", extras.vet_checkups);
    println!("  Training: {}", extras.training);

    println!();
    println!("💾 Output:");
    println!("  Format: {}", config.output_format()?);
    println!("  Destination: {}", config.output_path().unwrap_or("stdout"));
    println!("  Strict: {}", config.is_strict());

    println!();
    println!("✅ Dry run complete.");
    Ok(())
}
