use crate::config::Config;
use crate::error::Result;
use crate::events::WindowRecord;
use std::sync::Arc;

/// Узкий интерфейс к оконному менеджеру: список окон, имя процесса, активация
#[async_trait::async_trait]
pub trait WindowBackend: Send + Sync {
    /// Все окна в порядке, в котором их отдал оконный менеджер
    async fn list_windows(&self) -> Result<Vec<WindowRecord>>;

    /// Имя процесса по pid; пустая строка, если процесса уже нет
    async fn resolve_process_name(&self, pid: &str) -> Result<String>;

    /// Поднять и сфокусировать окно с данным идентификатором
    async fn activate_window(&self, window_id: &str) -> Result<()>;
}

/// Factory function to create an appropriate window backend based on the dry_run flag
pub fn create_window_backend(config: Arc<Config>, dry_run: bool) -> Arc<dyn WindowBackend> {
    if dry_run {
        Arc::new(super::dry_run::DryRunBackend::new())
    } else {
        Arc::new(super::wmctrl::WmctrlBackend::new(config))
    }
}
