use anyhow::Context;
use clap::Parser;
use tails_calc::utils::{logger, validation::Validate};
use tails_calc::{CalcError, Calculator, CliConfig, ReportSink};

fn fail(e: &CalcError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
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
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let format = match config.output_format() {
        Ok(format) => format,
        Err(e) => fail(&e),
    };
    let sink = ReportSink::from_option(config.output.as_deref());
    tracing::debug!("Rendering {} report to {}", format, sink.describe());

    let calculator = Calculator::new(config, format.presenter());
    let report = match calculator.run() {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    sink.write(&report)
        .with_context(|| format!("failed to write report to {}", sink.describe()))?;

    Ok(())
}
