use std::path::{Path, PathBuf};


/// Ordered set of directories searched for configuration files. First match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    config_paths: Vec<PathBuf>,
    resource_names: ResourceNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    log_toml: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        ResourceNames {
            log_toml: env!("RESOURCE_LOG_FILE").to_string(),
        }
    }
}

#[allow(dead_code)]
impl ResourceNames {
    pub fn log_toml(&self) -> String {
        self.log_toml.clone()
    }
}

impl Resources {

    pub fn new(config_paths: Vec<PathBuf>) -> Self {
        Resources { config_paths, resource_names: ResourceNames::default() }
    }

    /// `--config_dir` first, then `<exe_dir>/resources`, then the source tree's `resources`
    /// when running from `target/<profile>`.
    pub fn discover(config_dir: Option<PathBuf>, exe_dir: Option<&Path>) -> Self {
        let mut config_paths = Vec::new();

        if let Some(config_dir) = config_dir {
            config_paths.push(config_dir);
        }

        if let Some(exe_dir) = exe_dir {
            config_paths.push(exe_dir.join("resources"));
            config_paths.push(exe_dir.join("..").join("..").join("resources"));
        }

        Self::new(config_paths)
    }

    #[allow(dead_code)]
    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    #[allow(dead_code)]
    pub fn names(&self) -> ResourceNames {
        self.resource_names.clone()
    }

    pub fn file(&self, file_name: &str) -> Option<PathBuf> {
        for path in &self.config_paths {
            let file_path = path.join(file_name);
            if file_path.exists() {
                return Some(file_path);
            }
        }
        None
    }

    pub fn log_toml(&self) -> Option<PathBuf> {
        self.file(&self.resource_names.log_toml)
    }
}

pub fn current_exe_dir() -> Option<PathBuf> {
    std::env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
}
