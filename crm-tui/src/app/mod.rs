use crate::config::{CrmConfig, StartView};
use crate::toast::ToastNotifier;
use crm_core::{Client, ClientId, ClientStore, Directory, SystemClock};

mod form;
mod navigation;
mod search;
mod state;
pub use state::{FormFocus, LandingCard, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // The client directory; every mutation goes through it
    pub directory: Directory<ToastNotifier>,

    // Landing page
    pub focused_card: LandingCard,

    // Directory search box
    pub search_input: TextInput,
    pub search_focused: bool,

    // Table selection, index into the filtered list
    pub selected_row: usize,

    // Client dialog
    pub form_focus: FormFocus,
    pub form_input: TextInput, // Editing buffer for the focused text field
    pub form_error: Option<String>,
}

impl App {
    pub fn new(cfg: &CrmConfig) -> Self {
        let store = if cfg.seed_sample_clients {
            ClientStore::seeded(SystemClock)
        } else {
            ClientStore::new(SystemClock)
        };
        Self::with_store(cfg, store)
    }

    pub fn with_store(cfg: &CrmConfig, store: ClientStore) -> Self {
        let current_view = match cfg.start_view {
            StartView::Landing => View::Landing,
            StartView::Directory => View::Directory,
        };
        Self {
            running: true,
            current_view,
            status_message: None,
            directory: Directory::new(store, ToastNotifier::new(cfg.toast_duration())),
            focused_card: LandingCard::Clients,
            search_input: TextInput::new(),
            search_focused: false,
            selected_row: 0,
            form_focus: FormFocus::default(),
            form_input: TextInput::new(),
            form_error: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Navigate to a different view
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
        self.directory.notifier_mut().dismiss();

        match view {
            View::Landing => {
                self.search_focused = false;
                if self.directory.form().is_open() {
                    self.cancel_form();
                }
            }
            View::Directory => {
                self.clamp_selection();
            }
        }
    }

    /// The client under the table cursor, if any row is visible.
    pub fn selected_client(&self) -> Option<&Client> {
        self.directory.filtered().get(self.selected_row).copied()
    }

    pub fn selected_client_id(&self) -> Option<ClientId> {
        self.selected_client().map(|c| c.id.clone())
    }

    pub fn is_form_open(&self) -> bool {
        self.directory.form().is_open()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crm_core::FixedClock;
    use time::macros::date;

    /// App on the directory view with the sample rows and a long toast.
    pub fn directory_app() -> App {
        let cfg = CrmConfig {
            start_view: StartView::Directory,
            toast_seconds: 60,
            ..CrmConfig::default()
        };
        App::with_store(&cfg, ClientStore::seeded(FixedClock(date!(2026 - 10 - 19))))
    }
}
