use crate::error::{Result, SwitchError};
use crate::events::WindowRecord;
use crate::services::window_backend::WindowBackend;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Тестовый бэкенд: отдаёт заданный вывод wmctrl и запоминает все вызовы
#[derive(Default)]
pub struct FakeBackend {
    listing: String,
    names: HashMap<String, String>,
    fail_listing: bool,
    fail_activation: bool,
    name_delay: Option<Duration>,
    pub lookups: Mutex<Vec<String>>,
    pub activations: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new(listing: &str, names: &[(&str, &str)]) -> Self {
        Self {
            listing: listing.to_string(),
            names: names
                .iter()
                .map(|(pid, name)| (pid.to_string(), name.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_name_delay(mut self, delay: Duration) -> Self {
        self.name_delay = Some(delay);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_listing: true,
            fail_activation: true,
            ..Default::default()
        }
    }
}

fn missing_tool() -> SwitchError {
    SwitchError::external_tool(
        "wmctrl",
        std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    )
}

#[async_trait::async_trait]
impl WindowBackend for FakeBackend {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        if self.fail_listing {
            return Err(missing_tool());
        }
        Ok(self
            .listing
            .lines()
            .filter_map(|line| WindowRecord::parse_line(line).ok())
            .collect())
    }

    async fn resolve_process_name(&self, pid: &str) -> Result<String> {
        self.lookups.lock().push(pid.to_string());
        if let Some(delay) = self.name_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.names.get(pid).cloned().unwrap_or_default())
    }

    async fn activate_window(&self, window_id: &str) -> Result<()> {
        self.activations.lock().push(window_id.to_string());
        if self.fail_activation {
            return Err(missing_tool());
        }
        Ok(())
    }
}
