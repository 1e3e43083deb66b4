use super::r#trait::WindowBackend;
use crate::config::Config;
use crate::error::Result;
use crate::events::WindowRecord;
use crate::utils::{ensure_success, run_tool};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Адаптер над `wmctrl` и `ps`
pub struct WmctrlBackend {
    config: Arc<Config>,
}

impl WmctrlBackend {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

/// Разбирает вывод `wmctrl -lp` построчно.
///
/// Пустые строки пропускаются, строки с невалидным UTF-8 или неверной
/// структурой логируются и пропускаются, остальной список сохраняется.
pub fn parse_listing(stdout: &[u8]) -> Vec<WindowRecord> {
    let mut windows = Vec::new();

    for (index, raw) in stdout.split(|b| *b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim_end_matches('\r'),
            Err(e) => {
                warn!("Строка {} вывода wmctrl не в UTF-8, пропускаем: {}", index + 1, e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match WindowRecord::parse_line(line) {
            Ok(window) => windows.push(window),
            Err(e) => warn!("Пропускаем строку {}: {}", index + 1, e),
        }
    }

    windows
}

#[async_trait::async_trait]
impl WindowBackend for WmctrlBackend {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let tools = &self.config.tools;
        let output = run_tool(&tools.wmctrl, &["-lp"], tools.timeout()).await?;

        if let Err(e) = ensure_success(&tools.wmctrl, &output) {
            // частичный вывод всё равно полезен
            warn!("{}", e);
        }

        let windows = parse_listing(&output.stdout);
        debug!("wmctrl вернул {} окон", windows.len());
        Ok(windows)
    }

    async fn resolve_process_name(&self, pid: &str) -> Result<String> {
        let tools = &self.config.tools;
        let output = run_tool(&tools.ps, &["-p", pid, "-o", "comm="], tools.timeout()).await?;

        // для завершившегося процесса ps возвращает пустой вывод и код 1
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            debug!("Процесс {} не найден, имя пустое", pid);
        }
        Ok(name)
    }

    async fn activate_window(&self, window_id: &str) -> Result<()> {
        let tools = &self.config.tools;
        info!("Активация окна {}", window_id);

        let output = run_tool(&tools.wmctrl, &["-i", "-a", window_id], tools.timeout()).await?;
        ensure_success(&tools.wmctrl, &output)
    }
}
