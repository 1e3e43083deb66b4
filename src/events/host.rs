use super::window::DisplayItem;
use serde::{Deserialize, Serialize};

/// Запрос от лаунчера, одна JSON-строка на stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostRequest {
    /// Изменился текст запроса; `None` означает пустой ввод
    Query(Option<String>),
    /// Выбран элемент по индексу из последнего отрисованного списка
    Select(usize),
    /// Активировать окно по идентификатору напрямую
    Activate(String),
}

/// Элемент ответа на запрос, без внутреннего устройства `WindowRecord`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostItem {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostResponse {
    Items(Vec<HostItem>),
    Selected(String),
    Error(String),
}

impl HostItem {
    pub fn new(index: usize, item: &DisplayItem) -> Self {
        Self {
            index,
            id: item.window.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }
}

impl HostResponse {
    pub fn items(items: &[DisplayItem]) -> Self {
        HostResponse::Items(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| HostItem::new(index, item))
                .collect(),
        )
    }
}
