use std::sync::{Mutex, MutexGuard};

/// Variables read by `DashboardConfig::apply_env_overrides`.
pub const DASHBOARD_VARS: [&str; 4] = ["HOST", "PORT", "DATASET_PATH", "DASHBOARD_TITLE"];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the process environment for one test.
///
/// Taking the guard clears every dashboard variable; dropping it restores the
/// values seen before. Tests in one binary run in parallel, so the guard also
/// serializes access through a global lock.
pub struct DashboardEnv {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl DashboardEnv {
    pub fn clean() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let saved = DASHBOARD_VARS
            .iter()
            .map(|&name| (name, std::env::var(name).ok()))
            .collect();
        for name in DASHBOARD_VARS {
            std::env::remove_var(name);
        }
        Self { saved, _lock: lock }
    }

    pub fn set(&self, name: &str, value: &str) -> &Self {
        std::env::set_var(name, value);
        self
    }
}

impl Drop for DashboardEnv {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }
}
