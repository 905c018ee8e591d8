use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}
