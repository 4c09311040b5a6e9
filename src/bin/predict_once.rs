use clap::Parser;
use house_price_web::domain::model::PredictionRequest;
use house_price_web::utils::format::format_currency;
use house_price_web::utils::{logger, validation::Validate};
use house_price_web::{build_engine, AppConfig, PredictArgs};

fn main() -> anyhow::Result<()> {
    let args = PredictArgs::parse();

    logger::init_cli_logger(args.verbose, None);

    tracing::info!("📁 Loading configuration from: {}", args.config);
    let config = match AppConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = build_engine(&config)?;

    let request = PredictionRequest {
        area: args.area,
        bedrooms: args.bedrooms,
        age: args.age,
    };

    let result = match engine.predict(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    println!("🏠 Estimated House Price: {}", format_currency(result.price));

    if let Some(path) = &args.chart_out {
        let png = engine.render_chart_png(&request, &result)?;
        std::fs::write(path, png)?;
        println!("📁 Chart saved to: {}", path);
    }

    Ok(())
}
