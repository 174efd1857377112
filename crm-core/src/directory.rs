use tracing::info;

use crate::client::{Client, ClientId};
use crate::error::DirectoryError;
use crate::filter::{filter_clients, SearchQuery};
use crate::form::{ClientForm, Submitted};
use crate::notify::{Notification, Notifier};
use crate::store::{ClientStore, StatusSummary};

/// The searchable, editable client list.
///
/// Owns the collection, the search query and the add/edit form. All
/// mutations go through `submit_form` and `delete`, and each success is
/// reported once to the notifier.
#[derive(Debug)]
pub struct Directory<N: Notifier> {
    store: ClientStore,
    query: SearchQuery,
    form: ClientForm,
    notifier: N,
}

impl<N: Notifier> Directory<N> {
    pub fn new(store: ClientStore, notifier: N) -> Self {
        Self {
            store,
            query: SearchQuery::default(),
            form: ClientForm::new(),
            notifier,
        }
    }

    pub fn clients(&self) -> &[Client] {
        self.store.list()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.query = SearchQuery::new(raw);
    }

    /// Records visible under the current query, in collection order.
    pub fn filtered(&self) -> Vec<&Client> {
        filter_clients(self.store.list(), &self.query)
    }

    pub fn summary(&self) -> StatusSummary {
        self.store.summary()
    }

    /// Text for an empty table, `None` while something is visible.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.filtered().is_empty() {
            return None;
        }
        if self.query.is_empty() {
            Some("Список клиентов пуст")
        } else {
            Some("Клиенты не найдены")
        }
    }

    pub fn form(&self) -> &ClientForm {
        &self.form
    }

    /// Field-level access for the display layer. Submission still goes
    /// through `submit_form`.
    pub fn form_mut(&mut self) -> &mut ClientForm {
        &mut self.form
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit(&mut self, id: &ClientId) -> Result<(), DirectoryError> {
        let client = self
            .store
            .get(id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;
        self.form.open_edit(client);
        Ok(())
    }

    pub fn cancel_form(&mut self) {
        self.form.close();
    }

    pub fn submit_form(&mut self) -> Result<Submitted, DirectoryError> {
        let submitted = self.form.submit(&mut self.store)?;
        info!(id = %submitted.id, kind = ?submitted.kind, "Client saved");
        self.notifier.notify(submitted.kind);
        Ok(submitted)
    }

    /// Deletes immediately; there is no confirmation step.
    pub fn delete(&mut self, id: &ClientId) -> Result<Client, DirectoryError> {
        let removed = self.store.delete(id)?;
        info!(%id, "Client deleted");
        self.notifier.notify(Notification::Deleted);
        Ok(removed)
    }
}
