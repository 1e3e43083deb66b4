use crate::error::Result;
use crate::events::{HostRequest, HostResponse};
use crate::services::Switcher;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

/// Обработка одной JSON-строки от лаунчера
pub async fn handle_line(switcher: &Switcher, line: &str) -> HostResponse {
    let request: HostRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            error!("Некорректный запрос {:?}: {}", line, e);
            return HostResponse::Error(e.to_string());
        }
    };

    debug!("Запрос от хоста: {:?}", request);

    match request {
        HostRequest::Query(query) => {
            let items = switcher.handle_query(query.as_deref()).await;
            HostResponse::items(&items)
        }
        HostRequest::Select(index) => match switcher.select_index(index).await {
            Ok(window) => HostResponse::Selected(window.id),
            Err(e) => {
                error!("Не удалось активировать элемент #{}: {}", index, e);
                HostResponse::Error(e.to_string())
            }
        },
        HostRequest::Activate(id) => match switcher.activate(&id).await {
            Ok(()) => HostResponse::Selected(id),
            Err(e) => {
                error!("Не удалось активировать окно {}: {}", id, e);
                HostResponse::Error(e.to_string())
            }
        },
    }
}

/// Цикл запрос/ответ до конца входного потока
pub async fn serve<R, W>(switcher: &Switcher, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Ожидание запросов на stdin");
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(switcher, &line).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    info!("Входной поток закрыт, завершение");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_backend::FakeBackend;
    use std::sync::Arc;

    const LISTING: &str = "0x001 0 100 host Term\n0x002 -1 101 host Mail\n0x003 1 102 host Term";
    const NAMES: [(&str, &str); 3] = [("100", "term"), ("101", "mail"), ("102", "term")];

    #[tokio::test]
    async fn test_serve_query_then_select() {
        let backend = Arc::new(FakeBackend::new(LISTING, &NAMES));
        let switcher = Switcher::new(backend.clone());

        let input = b"{\"query\":\"term\"}\nnot json\n\n{\"select\":1}\n{\"select\":7}\n";
        let mut output = Vec::new();
        serve(&switcher, &input[..], &mut output).await.unwrap();

        let responses: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["items"].as_array().unwrap().len(), 2);
        assert_eq!(responses[0]["items"][1]["id"], "0x003");
        assert!(responses[1]["error"].is_string());
        assert_eq!(responses[2]["selected"], "0x003");
        assert!(responses[3]["error"].is_string());

        assert_eq!(*backend.activations.lock(), ["0x003"]);
    }

    #[tokio::test]
    async fn test_activate_failure_keeps_serving() {
        let switcher = Switcher::new(Arc::new(FakeBackend::failing()));

        let response = handle_line(&switcher, r#"{"activate":"0x0200000b"}"#).await;
        assert!(matches!(response, HostResponse::Error(_)));

        let response = handle_line(&switcher, r#"{"query":null}"#).await;
        assert_eq!(response, HostResponse::Items(Vec::new()));
    }
}
