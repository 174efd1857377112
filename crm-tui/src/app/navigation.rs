use super::*;

impl App {
    pub fn landing_focus_next(&mut self) {
        self.focused_card = self.focused_card.next();
    }

    pub fn landing_focus_previous(&mut self) {
        self.focused_card = self.focused_card.previous();
    }

    /// Handle Enter on the focused landing card
    pub fn activate_focused_card(&mut self) {
        if self.focused_card.is_enabled() {
            self.navigate_to(View::Directory);
        } else {
            self.set_status(format!("{}: скоро", self.focused_card.title()));
        }
    }

    /// Move the table cursor down one row
    pub fn select_next(&mut self) {
        let len = self.directory.filtered().len();
        if len > 0 && self.selected_row + 1 < len {
            self.selected_row += 1;
        }
    }

    /// Move the table cursor up one row
    pub fn select_previous(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_row = self.directory.filtered().len().saturating_sub(1);
    }

    /// Keep the cursor inside the filtered list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.directory.filtered().len();
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::directory_app;
    use super::*;

    #[test]
    fn selection_stops_at_both_ends() {
        let mut app = directory_app();
        app.select_previous();
        assert_eq!(app.selected_row, 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected_row, 2);
    }

    #[test]
    fn disabled_card_stays_on_landing() {
        let mut app = directory_app();
        app.navigate_to(View::Landing);
        app.landing_focus_next();
        app.activate_focused_card();
        assert_eq!(app.current_view, View::Landing);
        assert_eq!(app.status_message.as_deref(), Some("Аналитика: скоро"));

        app.landing_focus_previous();
        app.activate_focused_card();
        assert_eq!(app.current_view, View::Directory);
    }
}
