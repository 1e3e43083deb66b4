use crate::error::{Result, SwitchError};
use crate::events::{DisplayItem, WindowRecord};
use crate::services::window_backend::WindowBackend;
use crate::services::window_lister::{filter_items, WindowLister};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Точка входа для хоста: обработка запроса и выбора элемента
pub struct Switcher {
    backend: Arc<dyn WindowBackend>,
    lister: WindowLister,
    // последний отрисованный список, перезаписывается на каждый запрос
    last_items: RwLock<Vec<DisplayItem>>,
}

impl Switcher {
    pub fn new(backend: Arc<dyn WindowBackend>) -> Self {
        Self {
            lister: WindowLister::new(backend.clone()),
            backend,
            last_items: RwLock::new(Vec::new()),
        }
    }

    pub fn with_lookup_budget(mut self, budget: Duration) -> Self {
        self.lister = self.lister.with_lookup_budget(budget);
        self
    }

    /// Список видимых окон, отфильтрованный по запросу.
    ///
    /// Ошибка листинга не роняет запрос: возвращается пустой список.
    pub async fn handle_query(&self, query: Option<&str>) -> Vec<DisplayItem> {
        let items = match self.lister.list_visible_windows().await {
            Ok(items) => filter_items(items, query),
            Err(e) => {
                warn!("Не удалось получить список окон: {}", e);
                Vec::new()
            }
        };

        *self.last_items.write() = items.clone();
        items
    }

    /// Активирует окно, идентификатор передаётся без изменений
    pub async fn handle_select(&self, window: &WindowRecord) -> Result<()> {
        info!("Выбрано окно {}", window);
        self.activate(&window.id).await
    }

    pub async fn activate(&self, window_id: &str) -> Result<()> {
        self.backend.activate_window(window_id).await?;
        info!("Окно {} активировано", window_id);
        Ok(())
    }

    /// Выбор по индексу из последнего списка, возвращает активированное окно
    pub async fn select_index(&self, index: usize) -> Result<WindowRecord> {
        let window = self
            .last_items
            .read()
            .get(index)
            .map(|item| item.window.clone())
            .ok_or(SwitchError::UnknownItem(index))?;

        self.handle_select(&window).await?;
        Ok(window)
    }
}
