use tracing::debug;

use crate::client::{Client, ClientField, ClientFields, ClientId, ClientStatus};
use crate::error::DirectoryError;
use crate::notify::Notification;
use crate::store::ClientStore;

/// What the add/edit dialog is currently doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(ClientId),
}

/// Outcome of a successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub id: ClientId,
    pub kind: Notification,
}

/// Transient state of the add/edit dialog.
///
/// Every transition to `Closed` resets the fields to their defaults and
/// drops the edit target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientForm {
    mode: FormMode,
    data: ClientFields,
}

impl ClientForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn data(&self) -> &ClientFields {
        &self.data
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.data = ClientFields::default();
    }

    /// Opens the dialog pre-filled with a snapshot of `client`.
    pub fn open_edit(&mut self, client: &Client) {
        self.mode = FormMode::Edit(client.id.clone());
        self.data = client.fields();
    }

    /// Cancel or dismiss without submitting.
    pub fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.data = ClientFields::default();
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Редактировать клиента"
        } else {
            "Добавить нового клиента"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Сохранить"
        } else {
            "Добавить"
        }
    }

    pub fn field(&self, field: ClientField) -> &str {
        self.data.get(field)
    }

    pub fn set_field(&mut self, field: ClientField, value: impl Into<String>) {
        *self.data.get_mut(field) = value.into();
    }

    pub fn status(&self) -> ClientStatus {
        self.data.status
    }

    pub fn set_status(&mut self, status: ClientStatus) {
        self.data.status = status;
    }

    pub fn toggle_status(&mut self) {
        self.data.status = self.data.status.toggled();
    }

    /// Applies the form to `store` according to the current mode.
    ///
    /// Closes on success and when the edit target has disappeared. A
    /// validation failure keeps the dialog open with its input intact.
    pub fn submit(&mut self, store: &mut ClientStore) -> Result<Submitted, DirectoryError> {
        let result = match &self.mode {
            FormMode::Closed => return Err(DirectoryError::FormClosed),
            FormMode::Create => store
                .create(self.data.clone())
                .map(|c| Submitted {
                    id: c.id.clone(),
                    kind: Notification::Added,
                }),
            FormMode::Edit(id) => store
                .update(id, self.data.clone())
                .map(|c| Submitted {
                    id: c.id.clone(),
                    kind: Notification::Updated,
                }),
        };

        match &result {
            Ok(submitted) => {
                debug!(id = %submitted.id, "Client form submitted");
                self.close();
            }
            Err(DirectoryError::NotFound(_)) => self.close(),
            Err(_) => {}
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::ValidationError;
    use time::macros::date;

    fn store() -> ClientStore {
        ClientStore::seeded(FixedClock(date!(2026 - 10 - 19)))
    }

    fn fill(form: &mut ClientForm) {
        form.set_field(ClientField::Name, "X");
        form.set_field(ClientField::Company, "Y");
        form.set_field(ClientField::Email, "x@y.com");
        form.set_field(ClientField::Phone, "1");
    }

    #[test]
    fn starts_closed_with_defaults() {
        let form = ClientForm::new();
        assert!(!form.is_open());
        assert_eq!(form.data(), &ClientFields::default());
        assert_eq!(form.status(), ClientStatus::Active);
    }

    #[test]
    fn open_create_resets_fields() {
        let mut form = ClientForm::new();
        form.set_field(ClientField::Name, "leftover");
        form.open_create();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.field(ClientField::Name), "");
        assert_eq!(form.title(), "Добавить нового клиента");
        assert_eq!(form.submit_label(), "Добавить");
    }

    #[test]
    fn open_edit_snapshots_record() {
        let store = store();
        let target = &store.list()[2];
        let mut form = ClientForm::new();
        form.open_edit(target);

        assert_eq!(form.mode(), &FormMode::Edit(target.id.clone()));
        assert_eq!(form.data(), &target.fields());
        assert_eq!(form.status(), ClientStatus::Inactive);
        assert_eq!(form.title(), "Редактировать клиента");
        assert_eq!(form.submit_label(), "Сохранить");
    }

    #[test]
    fn close_resets_fields_and_target() {
        let store = store();
        let mut form = ClientForm::new();
        form.open_edit(&store.list()[0]);
        form.close();
        assert_eq!(form, ClientForm::default());
    }

    #[test]
    fn submit_create_appends_and_closes() {
        let mut store = store();
        let mut form = ClientForm::new();
        form.open_create();
        fill(&mut form);

        let submitted = form.submit(&mut store).unwrap();
        assert_eq!(submitted.kind, Notification::Added);
        assert_eq!(store.len(), 4);
        assert_eq!(store.list()[3].id, submitted.id);
        assert!(!form.is_open());
        assert_eq!(form.data(), &ClientFields::default());
    }

    #[test]
    fn submit_edit_updates_target_and_closes() {
        let mut store = store();
        let target = store.list()[1].clone();
        let mut form = ClientForm::new();
        form.open_edit(&target);
        form.toggle_status();

        let submitted = form.submit(&mut store).unwrap();
        assert_eq!(submitted.kind, Notification::Updated);
        assert_eq!(submitted.id, target.id);
        assert_eq!(store.list()[1].status, ClientStatus::Inactive);
        assert!(!form.is_open());
    }

    #[test]
    fn submit_with_missing_field_stays_open() {
        let mut store = store();
        let mut form = ClientForm::new();
        form.open_create();
        form.set_field(ClientField::Name, "Только имя");

        let err = form.submit(&mut store).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Validation(ValidationError::MissingField(ClientField::Company))
        );
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.field(ClientField::Name), "Только имя");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn submit_edit_for_deleted_record_closes() {
        let mut store = store();
        let target = store.list()[0].clone();
        let mut form = ClientForm::new();
        form.open_edit(&target);
        store.delete(&target.id).unwrap();

        let err = form.submit(&mut store).unwrap_err();
        assert!(err.is_not_found());
        assert!(!form.is_open());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn submit_while_closed_is_rejected() {
        let mut store = store();
        let mut form = ClientForm::new();
        assert_eq!(form.submit(&mut store), Err(DirectoryError::FormClosed));
    }
}
