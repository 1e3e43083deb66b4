use crate::error::Result;
use crate::switch_error;
use std::fmt;

/// Номер рабочего стола, которым wmctrl помечает «липкие» окна (видны на всех столах)
pub const STICKY_DESKTOP: i32 = -1;

/// Одно открытое окно из вывода `wmctrl -lp`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowRecord {
    /// Идентификатор окна как есть, обычно `0x...`
    pub id: String,
    pub desktop: i32,
    pub pid: String,
    pub host: String,
    pub title: String,
}

impl WindowRecord {
    /// Разбирает строку вида `<id> <desktop> <pid> <host> <title...>`.
    ///
    /// Заголовок собирается из всех токенов после четвёртого через одиночный пробел.
    /// Колонки wmctrl разделены только ASCII-пробелами, прочие пробельные символы
    /// остаются частью заголовка.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut tokens = line.split_ascii_whitespace();

        let (Some(id), Some(desktop), Some(pid), Some(host)) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(switch_error!(malformed_line, "{}", line));
        };

        let title = tokens.collect::<Vec<_>>().join(" ");
        if title.is_empty() {
            return Err(switch_error!(malformed_line, "{}", line));
        }

        let desktop = desktop
            .parse::<i32>()
            .map_err(|_| switch_error!(malformed_line, "{}", line))?;

        Ok(Self {
            id: id.to_string(),
            desktop,
            pid: pid.to_string(),
            host: host.to_string(),
            title,
        })
    }

    pub fn is_sticky(&self) -> bool {
        self.desktop == STICKY_DESKTOP
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" (pid {})", self.id, self.title, self.pid)
    }
}

/// Элемент списка для лаунчера: имя процесса, заголовок и окно для активации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub description: String,
    pub window: WindowRecord,
}

impl DisplayItem {
    pub fn new(name: String, window: WindowRecord) -> Self {
        Self {
            name,
            description: window.title.clone(),
            window,
        }
    }

    /// Регистрозависимое вхождение подстроки в имя ИЛИ описание
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.description.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwitchError;

    #[test]
    fn test_parse_line_fixed_columns() {
        let record = WindowRecord::parse_line("0x0200000b -1 4242 myhost My Title Here").unwrap();

        assert_eq!(record.id, "0x0200000b");
        assert_eq!(record.desktop, -1);
        assert_eq!(record.pid, "4242");
        assert_eq!(record.host, "myhost");
        assert_eq!(record.title, "My Title Here");
        assert!(record.is_sticky());
    }

    #[test]
    fn test_parse_line_collapses_title_whitespace() {
        let record = WindowRecord::parse_line("0x01  2   77 box   vim   -  main.rs ").unwrap();
        assert_eq!(record.desktop, 2);
        assert_eq!(record.title, "vim - main.rs");
        assert!(!record.is_sticky());
    }

    #[test]
    fn test_parse_line_keeps_unicode_spaces_in_title() {
        let record = WindowRecord::parse_line("0x01 0 1 h Slack\u{a0}|\u{2003}general").unwrap();
        assert_eq!(record.title, "Slack\u{a0}|\u{2003}general");

        let item = DisplayItem::new("slack".to_string(), record);
        assert!(item.matches("\u{a0}|"));
    }

    #[test]
    fn test_parse_line_malformed() {
        for line in ["", "0x01 0 100 host", "0x01 zero 100 host Title"] {
            match WindowRecord::parse_line(line) {
                Err(SwitchError::MalformedLine(raw)) => assert_eq!(raw, line),
                other => panic!("ожидалась MalformedLine для {:?}, получено {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_display_item_matches_name_or_description() {
        let window = WindowRecord::parse_line("0x01 0 1 host GitHub - Issue").unwrap();
        let item = DisplayItem::new("firefox".to_string(), window);

        assert_eq!(item.description, "GitHub - Issue");
        assert!(item.matches("fire"));
        assert!(item.matches("Git"));
        assert!(!item.matches("git"));
        assert!(!item.matches("zzz_no_such_string"));
    }
}
