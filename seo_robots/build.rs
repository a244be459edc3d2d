// build.rs - TOML-driven constant generation for directive engine limits
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    validation: ValidationLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ValidationLimits {
    max_directives: usize,
    max_token_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ROBOTS_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=ROBOTS_CONFIG_DIR");

    let profile = env::var("ROBOTS_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("ROBOTS_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of seo_robots directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_DIRECTIVES: usize = 10_000;
    const ABSOLUTE_MAX_TOKEN_LENGTH: usize = 65_536;

    if config.validation.max_directives == 0
        || config.validation.max_directives > ABSOLUTE_MAX_DIRECTIVES
    {
        panic!("LIMITS: max_directives must be between 1 and {}", ABSOLUTE_MAX_DIRECTIVES);
    }

    if config.validation.max_token_length == 0
        || config.validation.max_token_length > ABSOLUTE_MAX_TOKEN_LENGTH
    {
        panic!(
            "LIMITS: max_token_length must be between 1 and {}",
            ABSOLUTE_MAX_TOKEN_LENGTH
        );
    }

    if config.logging.log_buffer_size < 100 {
        panic!("LIMITS: log_buffer_size too small (min: 100)");
    }

    if profile == "production" && config.validation.max_directives > 1_000 {
        panic!("PRODUCTION: max_directives too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod validation {{
        pub const MAX_DIRECTIVES: usize = {};
        pub const MAX_TOKEN_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.validation.max_directives,
        config.validation.max_token_length,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
