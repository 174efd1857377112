use super::*;

impl App {
    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn unfocus_search(&mut self) {
        self.search_focused = false;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.apply_search();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.apply_search();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.apply_search();
    }

    pub fn search_move_cursor(&mut self, left: bool) {
        if left {
            self.search_input.move_left();
        } else {
            self.search_input.move_right();
        }
    }

    pub fn search_cursor_home_end(&mut self, home: bool) {
        if home {
            self.search_input.home();
        } else {
            self.search_input.end();
        }
    }

    /// Push the search box into the directory query; the table recomputes
    /// from it on the next frame.
    fn apply_search(&mut self) {
        self.directory.set_query(self.search_input.value.clone());
        self.selected_row = 0;
    }
}
