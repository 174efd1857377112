use super::*;
use crm_core::DirectoryError;
use tracing::warn;

impl App {
    /// Open the dialog for a new client
    pub fn open_create_form(&mut self) {
        self.directory.open_create();
        self.reset_form_focus();
    }

    /// Open the dialog pre-filled from the selected row
    pub fn open_edit_form(&mut self) {
        let Some(id) = self.selected_client_id() else {
            return;
        };
        match self.directory.open_edit(&id) {
            Ok(()) => self.reset_form_focus(),
            Err(e) => self.set_status(format!("Не удалось открыть клиента: {}", e)),
        }
    }

    /// Cancel or dismiss the dialog without saving
    pub fn cancel_form(&mut self) {
        self.directory.cancel_form();
        self.form_input.clear();
        self.form_error = None;
    }

    fn reset_form_focus(&mut self) {
        self.form_error = None;
        self.set_form_focus(FormFocus::default());
    }

    fn set_form_focus(&mut self, focus: FormFocus) {
        self.form_focus = focus;
        self.form_input = match focus.field() {
            Some(field) => TextInput::with_value(self.directory.form().field(field)),
            None => TextInput::new(),
        };
    }

    pub fn form_next_field(&mut self) {
        self.set_form_focus(self.form_focus.next());
    }

    pub fn form_previous_field(&mut self) {
        self.set_form_focus(self.form_focus.previous());
    }

    pub fn form_input_char(&mut self, c: char) {
        if self.form_focus.field().is_some() {
            self.form_input.insert(c);
            self.sync_form_input();
        }
    }

    pub fn form_input_backspace(&mut self) {
        if self.form_focus.field().is_some() {
            self.form_input.backspace();
            self.sync_form_input();
        }
    }

    pub fn form_input_clear(&mut self) {
        if self.form_focus.field().is_some() {
            self.form_input.clear();
            self.sync_form_input();
        }
    }

    pub fn form_move_cursor(&mut self, left: bool) {
        if left {
            self.form_input.move_left();
        } else {
            self.form_input.move_right();
        }
    }

    pub fn form_cursor_home_end(&mut self, home: bool) {
        if home {
            self.form_input.home();
        } else {
            self.form_input.end();
        }
    }

    pub fn form_toggle_status(&mut self) {
        self.directory.form_mut().toggle_status();
    }

    fn sync_form_input(&mut self) {
        if let Some(field) = self.form_focus.field() {
            self.directory
                .form_mut()
                .set_field(field, self.form_input.value.clone());
        }
        self.form_error = None;
    }

    /// Submit the dialog. On a validation error the dialog stays open and
    /// the cursor jumps to the offending field.
    pub fn submit_form(&mut self) {
        match self.directory.submit_form() {
            Ok(submitted) => {
                self.form_error = None;
                self.form_input.clear();
                self.clamp_selection();
                if let Some(row) = self
                    .directory
                    .filtered()
                    .iter()
                    .position(|c| c.id == submitted.id)
                {
                    self.selected_row = row;
                }
            }
            Err(DirectoryError::Validation(e)) => {
                self.set_form_focus(FormFocus::Field(e.field()));
                self.form_error = Some(format!("Заполните поле «{}»", e.field().label()));
            }
            Err(e) => {
                warn!(error = %e, "Client form submit failed");
                self.cancel_form();
                self.set_status(format!("Ошибка: {}", e));
            }
        }
    }

    /// Delete a client immediately
    pub fn delete_client(&mut self, id: &ClientId) {
        match self.directory.delete(id) {
            Ok(_) => self.clamp_selection(),
            Err(e) => {
                warn!(error = %e, "Client delete failed");
                self.set_status(format!("Ошибка: {}", e));
            }
        }
    }
}
