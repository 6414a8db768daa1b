use crate::domain::constants::{
    DEFAULT_ENV_FILE, DEFAULT_TEMPLATE, ENV_FILE_ENV_KEY, TEMPLATE_ENV_KEY,
};
use crate::services::checker::EnvSanityChecker;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "env-sanity-check",
    version,
    about = "Check that an env file declares every variable listed in its template"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        env = TEMPLATE_ENV_KEY,
        default_value = DEFAULT_TEMPLATE,
        help = "Template file listing the expected variables"
    )]
    pub template: PathBuf,
    #[arg(
        long = "env-file",
        env = ENV_FILE_ENV_KEY,
        default_value = DEFAULT_ENV_FILE,
        help = "Env file checked against the template"
    )]
    pub env_file: PathBuf,
    #[arg(long, help = "Directory relative file paths are resolved against")]
    pub dir: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Cli {
    pub fn checker(&self) -> EnvSanityChecker {
        let base = self.dir.clone().unwrap_or_default();
        EnvSanityChecker::new(base.join(&self.template), base.join(&self.env_file))
    }
}
