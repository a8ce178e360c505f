#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod framework;
mod app;
mod ui;
mod core;

use crate::core::{current_exe_dir, Resources};

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::{env, path::PathBuf};

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config_dir: Option<String>,
    ignored: Vec<String>,
}

/// Only `--config_dir <dir>` is understood. Everything else is collected and reported once logging is up.
fn parse_args(args: Vec<String>) -> Args {
    let mut parsed = Args::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config_dir" if i + 1 < args.len() => {
                parsed.config_dir = Some(args[i + 1].clone());
                i += 2;
            },
            _ => {
                parsed.ignored.push(args[i].clone());
                i += 1;
            }
        }
    }
    parsed
}

fn init_logging(resources: &Resources) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(log_toml) = resources.log_toml() {
        log4rs::init_file(log_toml, Default::default())?;
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {l:<5} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn launch() -> i32 {
    use crate::app::Application;
    use crate::framework::{Win32Host, Win32Queue, Win32Shell};
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWDEFAULT;

    let mut host = match Win32Host::new() {
        Ok(host) => host,
        Err(e) => {
            log::error!("Failed to get module handle: {}", e);
            return 0;
        }
    };

    // SW_SHOWDEFAULT picks up the show state the launcher put in STARTUPINFO
    let mut app = Application::create(Win32Shell, SW_SHOWDEFAULT);
    app.run(&mut host, Win32Queue)
}

fn run() -> i32 {
    let args = parse_args(env::args().collect());
    let resources = Resources::discover(args.config_dir.clone().map(PathBuf::from), current_exe_dir().as_deref());

    if let Err(e) = init_logging(&resources) {
        eprintln!("Log init error: {}", e);
    }
    log::info!("Starting Clickbox");
    log::info!("Args: {:?}", args);
    for arg in &args.ignored {
        log::warn!("Ignoring argument {}", arg);
    }

    let exit_code = launch();

    log::info!("Exiting Clickbox");
    exit_code
}

fn main() {
    std::process::exit(run());
}
