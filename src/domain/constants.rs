pub const DEFAULT_TEMPLATE: &str = ".env.example";
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const TEMPLATE_ENV_KEY: &str = "ENV_SANITY_TEMPLATE";
pub const ENV_FILE_ENV_KEY: &str = "ENV_SANITY_FILE";
