use std::fs;
use std::path::Path;
use toml::Value;

// Developer Resource Configuration Example
// Copy this content to 'dev-resources.toml' and modify as needed (is .gitignored)
//
// [resources]
// # Override default resource file names for development
// # These paths are relative to the config directory (resources/)
//
// # Default: "log.toml"
// log_file = "dev-log.toml"


#[derive(Debug)]
struct ResourceConfig {
    log_file: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            log_file: "log.toml".to_string(),
        }
    }
}

fn load_resource_config() -> ResourceConfig {
    let config_path = Path::new("dev-resources.toml");

    if !config_path.exists() {
        return ResourceConfig::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Failed to read dev-resources.toml: {}, using defaults", e);
            return ResourceConfig::default();
        }
    };

    let config_toml: Value = match config_content.parse() {
        Ok(toml) => toml,
        Err(e) => {
            println!("cargo:warning=Failed to parse dev-resources.toml: {}, using defaults", e);
            return ResourceConfig::default();
        }
    };

    let mut config = ResourceConfig::default();

    match config_toml.get("resources") {
        Some(resources) => {
            if let Some(log_file) = resources.get("log_file").and_then(|v| v.as_str()) {
                config.log_file = log_file.to_string();
            }
        }
        None => {
            println!("cargo:warning=No [resources] section in dev-resources.toml, using defaults");
        }
    }

    config
}

#[cfg(windows)]
fn compile_windows_resources() {
    // Only the target matters here, a Windows host may still cross-compile elsewhere
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    println!("cargo:rerun-if-changed=resources/windres/app.manifest");

    winres::WindowsResource::new()
        .set_language(winapi::um::winnt::MAKELANGID(
            winapi::um::winnt::LANG_VIETNAMESE,
            winapi::um::winnt::SUBLANG_VIETNAMESE_VIETNAM
        ))
        .set_manifest_file("resources/windres/app.manifest")
        .compile()
        .unwrap();
}

#[cfg(not(windows))]
fn compile_windows_resources() {
    println!("cargo:warning=Not a Windows host, skipping manifest and version resources");
}

fn main() {
    println!("cargo:rerun-if-changed=dev-resources.toml");

    let config = load_resource_config();

    // Set environment variables for compile-time access
    println!("cargo:rustc-env=RESOURCE_LOG_FILE={}", config.log_file);

    compile_windows_resources();
}
