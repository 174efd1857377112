use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::client::{Client, ClientFields, ClientId};
use crate::clock::{Clock, SystemClock};
use crate::error::DirectoryError;
use crate::seed::sample_clients;

/// Counts by status over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl StatusSummary {
    /// Share of active clients, rounded to the nearest whole percent.
    pub fn active_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.active as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// The authoritative in-memory list of client records.
///
/// Records keep insertion order. Ids come from a counter that only moves
/// forward, so an id is never handed out twice, deleted or not. `None`
/// once the counter has run past `u64::MAX`.
pub struct ClientStore {
    clients: Vec<Client>,
    next_id: Option<u64>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl fmt::Debug for ClientStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientStore")
            .field("clients", &self.clients)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl ClientStore {
    pub fn new(clock: impl Clock + Send + Sync + 'static) -> Self {
        Self::from_unique(clock, Vec::new())
    }

    /// A store holding the three sample rows.
    pub fn seeded(clock: impl Clock + Send + Sync + 'static) -> Self {
        Self::from_unique(clock, sample_clients())
    }

    /// A store over existing records. Ids must be unique.
    pub fn with_clients(
        clock: impl Clock + Send + Sync + 'static,
        clients: Vec<Client>,
    ) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(clients.len());
        if let Some(dup) = clients.iter().find(|c| !seen.insert(&c.id)) {
            warn!(id = %dup.id, "Rejected duplicate client id");
            return Err(DirectoryError::DuplicateId(dup.id.clone()));
        }
        Ok(Self::from_unique(clock, clients))
    }

    fn from_unique(clock: impl Clock + Send + Sync + 'static, clients: Vec<Client>) -> Self {
        // Start above any numeric id already present.
        let next_id = match clients
            .iter()
            .filter_map(|c| c.id.as_str().parse::<u64>().ok())
            .max()
        {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            clients,
            next_id,
            clock: Box::new(clock),
        }
    }

    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    pub fn get(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn summary(&self) -> StatusSummary {
        let active = self.clients.iter().filter(|c| c.status.is_active()).count();
        StatusSummary {
            total: self.clients.len(),
            active,
            inactive: self.clients.len() - active,
        }
    }

    /// Appends a new record with a fresh id and today's registration date.
    pub fn create(&mut self, fields: ClientFields) -> Result<&Client, DirectoryError> {
        if let Err(e) = fields.validate() {
            warn!(error = %e, "Rejected client create");
            return Err(e.into());
        }

        let id = self.allocate_id()?;
        let registered_at = self.clock.today();
        debug!(%id, %registered_at, "Creating client");

        self.clients.push(Client::from_fields(id, fields, registered_at));
        let index = self.clients.len() - 1;
        Ok(&self.clients[index])
    }

    /// Replaces the editable fields of an existing record.
    pub fn update(&mut self, id: &ClientId, fields: ClientFields) -> Result<&Client, DirectoryError> {
        if let Err(e) = fields.validate() {
            warn!(%id, error = %e, "Rejected client update");
            return Err(e.into());
        }

        let Some(client) = self.clients.iter_mut().find(|c| &c.id == id) else {
            warn!(%id, "Update for unknown client");
            return Err(DirectoryError::NotFound(id.clone()));
        };

        debug!(%id, "Updating client");
        client.apply(fields);
        Ok(client)
    }

    /// Removes and returns the record with the given id.
    ///
    /// An unknown id leaves the collection untouched.
    pub fn delete(&mut self, id: &ClientId) -> Result<Client, DirectoryError> {
        let Some(index) = self.clients.iter().position(|c| &c.id == id) else {
            warn!(%id, "Delete for unknown client");
            return Err(DirectoryError::NotFound(id.clone()));
        };

        debug!(%id, "Deleting client");
        Ok(self.clients.remove(index))
    }

    fn allocate_id(&mut self) -> Result<ClientId, DirectoryError> {
        let Some(next) = self.next_id else {
            warn!("Client id counter exhausted");
            return Err(DirectoryError::IdsExhausted);
        };
        self.next_id = next.checked_add(1);
        Ok(ClientId::new(next.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientField, ClientStatus};
    use crate::clock::FixedClock;
    use crate::error::ValidationError;
    use time::macros::date;

    fn store() -> ClientStore {
        ClientStore::seeded(FixedClock(date!(2026 - 10 - 19)))
    }

    fn fields() -> ClientFields {
        ClientFields::new("X", "Y", "x@y.com", "1")
    }

    fn ids(store: &ClientStore) -> Vec<String> {
        store.list().iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn create_appends_fourth_record_with_fresh_id_and_today() {
        let mut store = store();
        let created = store.create(fields()).unwrap().clone();

        assert_eq!(store.len(), 4);
        assert_eq!(store.list()[3], created);
        assert_eq!(created.name, "X");
        assert_eq!(created.company, "Y");
        assert_eq!(created.email, "x@y.com");
        assert_eq!(created.phone, "1");
        assert_eq!(created.status, ClientStatus::Active);
        assert_eq!(created.registered_at, date!(2026 - 10 - 19));
        assert!(!["1", "2", "3"].contains(&created.id.as_str()));
    }

    #[test]
    fn rapid_creates_never_collide() {
        let mut store = store();
        for _ in 0..50 {
            store.create(fields()).unwrap();
        }
        let unique: HashSet<_> = store.list().iter().map(|c| c.id.clone()).collect();
        assert_eq!(unique.len(), store.len());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store();
        let first = store.create(fields()).unwrap().id.clone();
        store.delete(&first).unwrap();
        let second = store.create(fields()).unwrap().id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn create_rejects_empty_required_field() {
        let mut store = store();
        let mut input = fields();
        input.email.clear();

        let err = store.create(input).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Validation(ValidationError::MissingField(ClientField::Email))
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_replaces_fields_of_target_only() {
        let mut store = store();
        let before = store.list().to_vec();
        let target = before[1].id.clone();

        let updated = store
            .update(
                &target,
                ClientFields::new("Новое имя", "Новая компания", "n@n.ru", "+7 0")
                    .with_status(ClientStatus::Inactive),
            )
            .unwrap()
            .clone();

        assert_eq!(updated.id, before[1].id);
        assert_eq!(updated.registered_at, before[1].registered_at);
        assert_eq!(updated.name, "Новое имя");
        assert_eq!(store.list()[0], before[0]);
        assert_eq!(store.list()[2], before[2]);
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn status_change_moves_one_client_between_counts() {
        let mut store = store();
        let before = store.summary();
        let target = store.list()[1].clone();

        store
            .update(&target.id, target.fields().with_status(ClientStatus::Inactive))
            .unwrap();

        let after = store.summary();
        assert_eq!(after.active, before.active - 1);
        assert_eq!(after.inactive, before.inactive + 1);
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = store();
        let before = store.list().to_vec();
        let err = store.update(&ClientId::new("404"), fields()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn update_with_empty_field_leaves_record_alone() {
        let mut store = store();
        let before = store.list()[0].clone();
        let mut input = before.fields();
        input.name = String::new();

        assert!(store.update(&before.id, input).is_err());
        assert_eq!(store.list()[0], before);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut store = store();
        let removed = store.delete(&ClientId::new("2")).unwrap();
        assert_eq!(removed.id, ClientId::new("2"));
        assert_eq!(ids(&store), vec!["1", "3"]);
    }

    #[test]
    fn delete_twice_has_same_effect_as_once() {
        let mut store = store();
        store.delete(&ClientId::new("1")).unwrap();
        let after_first = store.list().to_vec();

        let err = store.delete(&ClientId::new("1")).unwrap_err();
        assert_eq!(err, DirectoryError::NotFound(ClientId::new("1")));
        assert_eq!(store.list(), after_first.as_slice());
    }

    #[test]
    fn summary_counts_seed_rows() {
        let summary = store().summary();
        assert_eq!(
            summary,
            StatusSummary {
                total: 3,
                active: 2,
                inactive: 1
            }
        );
        assert_eq!(summary.active_percent(), 67);
    }

    #[test]
    fn empty_store_reports_zero_percent() {
        let store = ClientStore::new(FixedClock(date!(2026 - 10 - 19)));
        assert!(store.is_empty());
        assert_eq!(store.summary().active_percent(), 0);
    }

    #[test]
    fn counter_starts_above_existing_numeric_ids() {
        let mut clients = sample_clients();
        clients[0].id = ClientId::new("41");
        let mut store =
            ClientStore::with_clients(FixedClock(date!(2026 - 10 - 19)), clients).unwrap();
        assert_eq!(store.create(fields()).unwrap().id, ClientId::new("42"));
    }

    #[test]
    fn with_clients_rejects_duplicate_ids() {
        let mut clients = sample_clients();
        clients[1].id = ClientId::new("1");
        let err = ClientStore::with_clients(FixedClock(date!(2026 - 10 - 19)), clients).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateId(ClientId::new("1")));
    }

    #[test]
    fn max_numeric_id_exhausts_counter_without_overflow() {
        let mut clients = sample_clients();
        clients[0].id = ClientId::new(u64::MAX.to_string());
        let mut store =
            ClientStore::with_clients(FixedClock(date!(2026 - 10 - 19)), clients).unwrap();

        assert_eq!(store.create(fields()).unwrap_err(), DirectoryError::IdsExhausted);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn last_id_is_handed_out_once() {
        let mut clients = sample_clients();
        clients[0].id = ClientId::new((u64::MAX - 1).to_string());
        let mut store =
            ClientStore::with_clients(FixedClock(date!(2026 - 10 - 19)), clients).unwrap();

        assert_eq!(
            store.create(fields()).unwrap().id,
            ClientId::new(u64::MAX.to_string())
        );
        assert_eq!(store.create(fields()).unwrap_err(), DirectoryError::IdsExhausted);
        assert_eq!(store.len(), 4);
    }
}
