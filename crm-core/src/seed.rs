use time::macros::date;

use crate::client::{Client, ClientFields, ClientId, ClientStatus};

/// The rows a fresh directory opens with.
pub fn sample_clients() -> Vec<Client> {
    vec![
        Client::from_fields(
            ClientId::new("1"),
            ClientFields::new(
                "Александр Петров",
                "ООО \"Техносервис\"",
                "petrov@techservice.ru",
                "+7 (495) 123-45-67",
            ),
            date!(2024 - 01 - 15),
        ),
        Client::from_fields(
            ClientId::new("2"),
            ClientFields::new(
                "Мария Сидорова",
                "ЗАО \"Консалтинг Групп\"",
                "m.sidorova@consulting.ru",
                "+7 (495) 234-56-78",
            ),
            date!(2024 - 02 - 20),
        ),
        Client::from_fields(
            ClientId::new("3"),
            ClientFields::new(
                "Иван Кузнецов",
                "ИП Кузнецов",
                "kuznetsov@mail.ru",
                "+7 (495) 345-67-89",
            )
            .with_status(ClientStatus::Inactive),
            date!(2024 - 03 - 10),
        ),
    ]
}
