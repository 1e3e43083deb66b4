use crate::config::ToolsConfig;
use crate::debug_if_enabled;
use crate::error::Result;
use crate::events::DisplayItem;
use crate::services::window_backend::WindowBackend;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::warn;

/// Строит список элементов для лаунчера из окон оконного менеджера
pub struct WindowLister {
    backend: Arc<dyn WindowBackend>,
    // общее время на все запросы имён процессов в одном вызове
    lookup_budget: Duration,
}

impl WindowLister {
    pub fn new(backend: Arc<dyn WindowBackend>) -> Self {
        Self {
            backend,
            lookup_budget: ToolsConfig::default().timeout(),
        }
    }

    pub fn with_lookup_budget(mut self, budget: Duration) -> Self {
        self.lookup_budget = budget;
        self
    }

    /// Окна без «липких», с именами процессов, в порядке оконного менеджера.
    ///
    /// Имена кэшируются только в пределах одного вызова. Когда бюджет на имена
    /// исчерпан, оставшиеся окна получают пустое имя, но остаются в списке.
    pub async fn list_visible_windows(&self) -> Result<Vec<DisplayItem>> {
        let windows = self.backend.list_windows().await?;
        let deadline = Instant::now() + self.lookup_budget;
        let mut names: HashMap<String, String> = HashMap::new();
        let mut items = Vec::with_capacity(windows.len());

        for window in windows.into_iter().filter(|w| !w.is_sticky()) {
            let name = match names.get(&window.pid) {
                Some(name) => name.clone(),
                None => {
                    let name = self.resolve_before(&window.pid, deadline).await;
                    names.insert(window.pid.clone(), name.clone());
                    name
                }
            };

            items.push(DisplayItem::new(name, window));
        }

        debug_if_enabled!("Видимых окон: {}, уникальных процессов: {}", items.len(), names.len());
        Ok(items)
    }

    async fn resolve_before(&self, pid: &str, deadline: Instant) -> String {
        if Instant::now() >= deadline {
            debug_if_enabled!("Бюджет на имена исчерпан, pid {} без имени", pid);
            return String::new();
        }

        match timeout_at(deadline, self.backend.resolve_process_name(pid)).await {
            Ok(Ok(name)) => name,
            Ok(Err(e)) => {
                warn!("Не удалось получить имя процесса {}: {}", pid, e);
                String::new()
            }
            Err(_) => {
                warn!("Бюджет на имена процессов исчерпан на pid {}", pid);
                String::new()
            }
        }
    }
}

/// Оставляет элементы, у которых запрос входит в имя или описание.
///
/// Пустой или отсутствующий запрос возвращает список без изменений.
pub fn filter_items(items: Vec<DisplayItem>, query: Option<&str>) -> Vec<DisplayItem> {
    match query {
        None | Some("") => items,
        Some(query) => items.into_iter().filter(|item| item.matches(query)).collect(),
    }
}
