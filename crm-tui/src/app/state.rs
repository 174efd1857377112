use crm_core::ClientField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Landing,
    Directory,
}

/// Cards on the landing page. Only the directory is available today.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingCard {
    Clients,
    Analytics,
    Settings,
}

impl LandingCard {
    pub const ALL: [LandingCard; 3] = [
        LandingCard::Clients,
        LandingCard::Analytics,
        LandingCard::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LandingCard::Clients => "База клиентов",
            LandingCard::Analytics => "Аналитика",
            LandingCard::Settings => "Настройки",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LandingCard::Clients => "Централизованное хранение и управление данными клиентов",
            LandingCard::Analytics => "Отчеты и статистика по клиентской базе в реальном времени",
            LandingCard::Settings => "Конфигурация системы и управление доступом",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == LandingCard::Clients
    }

    pub fn next(self) -> Self {
        match self {
            LandingCard::Clients => LandingCard::Analytics,
            LandingCard::Analytics => LandingCard::Settings,
            LandingCard::Settings => LandingCard::Clients,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            LandingCard::Clients => LandingCard::Settings,
            LandingCard::Analytics => LandingCard::Clients,
            LandingCard::Settings => LandingCard::Analytics,
        }
    }
}

/// Which control of the client dialog has the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormFocus {
    Field(ClientField),
    Status,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(ClientField::Name)
    }
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Field(ClientField::Name) => FormFocus::Field(ClientField::Company),
            FormFocus::Field(ClientField::Company) => FormFocus::Field(ClientField::Email),
            FormFocus::Field(ClientField::Email) => FormFocus::Field(ClientField::Phone),
            FormFocus::Field(ClientField::Phone) => FormFocus::Status,
            FormFocus::Status => FormFocus::Field(ClientField::Name),
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormFocus::Field(ClientField::Name) => FormFocus::Status,
            FormFocus::Field(ClientField::Company) => FormFocus::Field(ClientField::Name),
            FormFocus::Field(ClientField::Email) => FormFocus::Field(ClientField::Company),
            FormFocus::Field(ClientField::Phone) => FormFocus::Field(ClientField::Email),
            FormFocus::Status => FormFocus::Field(ClientField::Phone),
        }
    }

    pub fn field(self) -> Option<ClientField> {
        match self {
            FormFocus::Field(field) => Some(field),
            FormFocus::Status => None,
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input holding `s` with the cursor at the end.
    pub fn with_value(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move cursor one char to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.value[pos..]
            .chars()
            .next()
            .map_or(pos, |c| pos + c.len_utf8())
    }
}
