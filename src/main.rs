use clap::Parser;
use env_sanity::cli::Cli;
use env_sanity::services::output::{render_json, render_text};
use log::LevelFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("error: {:#}", err);
            2
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let report = cli.checker().inspect()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        render_json(&report, &mut out)?;
    } else {
        render_text(&report, &mut out)?;
    }
    Ok(report.passed())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
