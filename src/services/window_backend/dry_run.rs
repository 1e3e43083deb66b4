use super::r#trait::WindowBackend;
use crate::error::Result;
use crate::events::WindowRecord;
use tracing::info;

const FAKE_LISTING: &str = "\
0x01e00003  0 1201 dry-run Terminal - dry_run
0x02200007 -1 1202 dry-run Panel - dry_run
0x02a0000b  1 1203 dry-run Browser - dry_run
0x03400004  1 1204 dry-run Editor - dry_run";

const FAKE_PROCESSES: [(&str, &str); 4] = [
    ("1201", "alacritty"),
    ("1202", "xfce4-panel"),
    ("1203", "firefox"),
    ("1204", "nvim"),
];

/// Бэкенд без внешних процессов: фиксированный набор окон, активация только логируется
pub struct DryRunBackend;

impl DryRunBackend {
    pub fn new() -> Self {
        info!("Dry-run режим - окна эмулируются, wmctrl не вызывается");
        Self
    }
}

#[async_trait::async_trait]
impl WindowBackend for DryRunBackend {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        FAKE_LISTING.lines().map(WindowRecord::parse_line).collect()
    }

    async fn resolve_process_name(&self, pid: &str) -> Result<String> {
        Ok(FAKE_PROCESSES
            .iter()
            .find(|(fake_pid, _)| *fake_pid == pid)
            .map(|(_, name)| name.to_string())
            .unwrap_or_default())
    }

    async fn activate_window(&self, window_id: &str) -> Result<()> {
        info!("[DRY RUN] Активация окна {}", window_id);
        Ok(())
    }
}
