use anyhow::{Context, Result};
use crm_core::{Client, ClientStore, Directory, NullNotifier, SystemClock};
use std::io::Write;

/// Print the sample directory, optionally filtered, without starting the UI.
pub fn print_directory(query: Option<&str>, json: bool, out: &mut impl Write) -> Result<()> {
    let mut directory = Directory::new(ClientStore::seeded(SystemClock), NullNotifier);
    if let Some(query) = query {
        directory.set_query(query);
    }
    write_clients(&directory.filtered(), json, out)
}

fn write_clients(clients: &[&Client], json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let body = serde_json::to_string_pretty(clients).context("Failed to encode clients")?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }

    if clients.is_empty() {
        writeln!(out, "Клиенты не найдены")?;
        return Ok(());
    }

    for client in clients {
        writeln!(
            out,
            "{:<4} {:<20} {:<26} {:<28} {:<20} {:<11} {}",
            client.id.as_str(),
            client.name,
            client.company,
            client.email,
            client.phone,
            client.status.label(),
            client.registered_at,
        )?;
    }
    Ok(())
}
