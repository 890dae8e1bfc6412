use clap::Parser;
use image_scan::{AppConfig, AppError, Cli, ScanConfig};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("[ERROR] {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn start(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::new()?;
    let scan_config = ScanConfig::from_cli(cli, &config);

    env_logger::Builder::new()
        .filter_level(scan_config.log_level(&config))
        .init();

    info!("Starting image_scan");

    let work_dir = std::env::current_dir()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = image_scan::run(&scan_config, &work_dir, &mut out)?;

    info!("image_scan finished: {} images reported", summary.images);
    Ok(())
}
