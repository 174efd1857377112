use crate::client::Client;

/// Free-text directory search.
///
/// Matching is a case-insensitive substring test against name, company
/// and email. Phone numbers are not searched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, client: &Client) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&client.name, &client.company, &client.email]
            .into_iter()
            .any(|haystack| haystack.to_lowercase().contains(&self.needle))
    }
}

/// Subset of `clients` matching `query`, in collection order.
pub fn filter_clients<'a>(clients: &'a [Client], query: &SearchQuery) -> Vec<&'a Client> {
    clients.iter().filter(|c| query.matches(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_clients;

    fn names(found: &[&Client]) -> Vec<String> {
        found.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let clients = sample_clients();
        let found = filter_clients(&clients, &SearchQuery::default());
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].id, clients[0].id);
        assert_eq!(found[2].id, clients[2].id);
    }

    #[test]
    fn latin_query_is_case_insensitive() {
        let clients = sample_clients();
        for query in ["consulting", "CONSULTING", "CoNsUlTiNg"] {
            let found = filter_clients(&clients, &SearchQuery::new(query));
            assert_eq!(names(&found), vec!["Мария Сидорова"], "query {query}");
        }
    }

    #[test]
    fn cyrillic_query_is_case_insensitive() {
        let clients = sample_clients();
        for query in ["консалтинг", "КОНСАЛТИНГ", "Консалтинг"] {
            let found = filter_clients(&clients, &SearchQuery::new(query));
            assert_eq!(names(&found), vec!["Мария Сидорова"], "query {query}");
        }
    }

    #[test]
    fn matches_name_company_or_email() {
        let clients = sample_clients();
        assert_eq!(
            names(&filter_clients(&clients, &SearchQuery::new("петров"))),
            vec!["Александр Петров"]
        );
        assert_eq!(
            names(&filter_clients(&clients, &SearchQuery::new("ИП "))),
            vec!["Иван Кузнецов"]
        );
        assert_eq!(
            names(&filter_clients(&clients, &SearchQuery::new("@mail.ru"))),
            vec!["Иван Кузнецов"]
        );
    }

    #[test]
    fn phone_is_not_searched() {
        let clients = sample_clients();
        assert!(filter_clients(&clients, &SearchQuery::new("123-45-67")).is_empty());
    }

    #[test]
    fn shared_substring_keeps_collection_order() {
        let clients = sample_clients();
        let found = filter_clients(&clients, &SearchQuery::new(".ru"));
        assert_eq!(
            names(&found),
            vec!["Александр Петров", "Мария Сидорова", "Иван Кузнецов"]
        );
    }

    #[test]
    fn every_result_contains_query() {
        let clients = sample_clients();
        for query in ["а", "ов", "o", "serv", "zzz"] {
            let q = SearchQuery::new(query);
            let found = filter_clients(&clients, &q);
            for c in &found {
                let hit = [&c.name, &c.company, &c.email]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&query.to_lowercase()));
                assert!(hit, "{} should not match {query}", c.name);
            }
            let expected = clients.iter().filter(|c| q.matches(c)).count();
            assert_eq!(found.len(), expected);
        }
    }
}
