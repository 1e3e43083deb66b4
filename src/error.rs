use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Не удалось запустить {tool}: {source}")]
    ExternalTool {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} не ответил за {timeout_ms}мс")]
    ToolTimeout { tool: String, timeout_ms: u64 },

    #[error("{tool} завершился с кодом {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: i32,
        stderr: String,
    },

    #[error("Некорректная строка списка окон: {0:?}")]
    MalformedLine(String),

    #[error("Элемент #{0} отсутствует в последнем списке")]
    UnknownItem(usize),

    #[error("Некорректный запрос: {0}")]
    Protocol(#[from] serde_json::Error),
}

impl SwitchError {
    pub fn external_tool(tool: impl Into<String>, source: std::io::Error) -> Self {
        SwitchError::ExternalTool {
            tool: tool.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwitchError>;

// Удобный макрос для ошибок со строковым payload
#[macro_export]
macro_rules! switch_error {
    (malformed_line, $($arg:tt)*) => {
        $crate::error::SwitchError::MalformedLine(format!($($arg)*))
    };
}
