/// Inline-кнопка: подпись и callback-токен
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback: String,
}

impl Button {
    pub fn new(label: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback: callback.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// По одной кнопке в строке
    pub fn single_column(buttons: Vec<Button>) -> Self {
        Self::columns(buttons, 1)
    }

    pub fn columns(buttons: Vec<Button>, per_row: usize) -> Self {
        let per_row = per_row.max(1);
        let mut rows = Vec::new();
        let mut row = Vec::with_capacity(per_row);

        for button in buttons {
            row.push(button);
            if row.len() == per_row {
                rows.push(std::mem::take(&mut row));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }

        Self { rows }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Исходящее сообщение, чат подставляет исполнитель
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Text(String),
    Photo(String),
    TextWithButtons { text: String, keyboard: Keyboard },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Send(Outbound),
    /// Запросить погоду, результат вернется событием
    FetchWeather { city: String },
}

impl Effect {
    pub fn text(text: impl Into<String>) -> Self {
        Effect::Send(Outbound::Text(text.into()))
    }

    pub fn photo(url: impl Into<String>) -> Self {
        Effect::Send(Outbound::Photo(url.into()))
    }

    pub fn buttons(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Effect::Send(Outbound::TextWithButtons {
            text: text.into(),
            keyboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_pack_rows_left_to_right() {
        let keyboard = Keyboard::columns(
            vec![
                Button::new("a", "a"),
                Button::new("b", "b"),
                Button::new("c", "c"),
            ],
            2,
        );

        assert_eq!(keyboard.rows.len(), 2);
        assert_eq!(keyboard.rows[0].len(), 2);
        assert_eq!(keyboard.rows[1][0].callback, "c");
        assert_eq!(keyboard.buttons().count(), 3);
    }
}
