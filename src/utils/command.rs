use crate::debug_if_enabled;
use crate::error::{Result, SwitchError};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Запускает внешнюю утилиту, собирает stdout/stderr и ограничивает время работы.
///
/// Код возврата не проверяется: решение остаётся за вызывающим.
pub async fn run_tool(program: &str, args: &[&str], timeout: Duration) -> Result<Output> {
    debug_if_enabled!("Запуск {} {:?}", program, args);

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| SwitchError::external_tool(program, e))?;

    // при таймауте future с ребёнком дропается, kill_on_drop завершает процесс
    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => output.map_err(|e| SwitchError::external_tool(program, e)),
        Err(_) => Err(SwitchError::ToolTimeout {
            tool: program.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}

/// Проверяет код возврата и превращает неуспех в `ToolFailed`
pub fn ensure_success(program: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }

    Err(SwitchError::ToolFailed {
        tool: program.to_string(),
        status: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
