//! The operation registry: which commands the client can build, and the
//! data fields each one requires.

use serde_json::{json, Value};

use crate::ipc::error::IpcError;
use crate::ipc::types::CommandMessage;

/// Required data fields and their defaults for a registered operation.
/// Returns `None` for operations the client does not know about.
fn template_fields(method: &str) -> Option<Vec<(&'static str, Value)>> {
    match method {
        "ueberzugpp/set_offset" => Some(vec![
            ("app-id", json!("")),
            ("x", json!(0)),
            ("y", json!(0)),
        ]),
        "window-rules/view-info" => Some(vec![("id", json!(0))]),
        "window-rules/list-views" | "wayfire/configuration" | "stipc/ping" => Some(vec![]),
        _ => None,
    }
}

pub fn known_operations() -> &'static [&'static str] {
    &[
        "ueberzugpp/set_offset",
        "window-rules/view-info",
        "window-rules/list-views",
        "wayfire/configuration",
        "stipc/ping",
    ]
}

/// Build a fresh command for `method`, pre-populated with the default value
/// of every field the operation requires. Each call returns an independently
/// owned message.
pub fn get_template(method: &str) -> Result<CommandMessage, IpcError> {
    let fields = template_fields(method).ok_or_else(|| IpcError::UnknownOperation {
        method: method.to_string(),
    })?;

    let mut msg = CommandMessage::new(method);
    for (key, value) in fields {
        msg.set(key, value);
    }
    Ok(msg)
}

/// Check a message against the registry before it goes on the wire: the
/// method must be registered and every required field must still be present.
pub fn validate(msg: &CommandMessage) -> Result<(), IpcError> {
    let fields = template_fields(&msg.method).ok_or_else(|| IpcError::UnknownOperation {
        method: msg.method.clone(),
    })?;

    for (key, _) in fields {
        if !msg.data.contains_key(key) {
            return Err(IpcError::MissingField {
                method: msg.method.clone(),
                field: key.to_string(),
            });
        }
    }
    Ok(())
}
