use crate::app::App;
use tracing::debug;

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App) {
    debug!(?action, "Running action");
    match action {
        Action::SubmitForm => app.submit_form(),
        Action::DeleteClient { id } => app.delete_client(&id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::directory_app;
    use crm_core::ClientId;

    #[test]
    fn delete_action_removes_client() {
        let mut app = directory_app();
        run_action(
            Action::DeleteClient {
                id: ClientId::new("2"),
            },
            &mut app,
        );
        let ids: Vec<_> = app.directory.clients().iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn submit_action_without_open_form_reports_error() {
        let mut app = directory_app();
        run_action(Action::SubmitForm, &mut app);
        assert_eq!(app.directory.clients().len(), 3);
        assert!(app.status_message.is_some());
    }
}
