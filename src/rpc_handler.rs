//! RPC method handler for the LinkVault JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` is the whole command/query surface the presentation layer
//! sees: it parses params, calls into the vault, and shapes JSON results.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::link_vault::{LinkVault, LinkVaultTrait, RenameOutcome};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::time_ago::{folder_age, now_millis, time_ago};
use crate::types::folder::{folder_emoji, Folder, FolderTag, DEFAULT_FOLDER_EMOJI};
use crate::types::link::Link;

fn str_param<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

/// A link as shown on a card: stored fields plus render-time labels.
fn link_view(vault: &LinkVault, link: &Link, now: i64) -> Value {
    let emoji = link.is_filed().then(|| {
        vault
            .folder_tag_for(link)
            .map(|t| t.emoji())
            .unwrap_or(DEFAULT_FOLDER_EMOJI)
    });
    json!({
        "id": link.id,
        "url": link.url,
        "domain": link.domain(),
        "tags": link.tags,
        "note": link.note,
        "folder": link.folder,
        "folderEmoji": emoji,
        "createdAt": link.created_at,
        "timeAgo": time_ago(now, link.created_at),
    })
}

/// A folder row: stored fields plus link count and age label.
fn folder_view(vault: &LinkVault, folder: &Folder, now: i64) -> Value {
    json!({
        "id": folder.id,
        "name": folder.name,
        "tag": folder.tag,
        "emoji": folder.tag.emoji(),
        "linkCount": vault.link_count(&folder.name),
        "createdAt": folder.created_at,
        "age": folder_age(now, folder.created_at),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Links ───
        "link.create" => {
            let url = str_param(params, "url").ok_or("missing url")?;
            let tags = str_param(params, "tags").unwrap_or("");
            let note = str_param(params, "note").unwrap_or("");
            let folder = str_param(params, "folder").unwrap_or("");
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let link = a
                .vault
                .create_link(url, tags, note, folder)
                .map_err(|e| e.to_string())?;
            Ok(link_view(&a.vault, &link, now_millis()))
        }
        "link.delete" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let result = match str_param(params, "id") {
                Some(id) => a.vault.delete_link(id),
                None => {
                    let index = params
                        .get("index")
                        .and_then(|v| v.as_u64())
                        .ok_or("missing id or index")?;
                    a.vault.delete_link_at(index as usize)
                }
            };
            let removed = result.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "deleted": removed.is_some()}))
        }
        "link.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let now = now_millis();
            let items: Vec<Value> = a.vault.links().iter().map(|l| link_view(&a.vault, l, now)).collect();
            let total = items.len();
            Ok(json!({"items": items, "total": total}))
        }
        "link.visible" => {
            let query = str_param(params, "query").unwrap_or("");
            let folder = str_param(params, "folder").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let now = now_millis();
            let items: Vec<Value> = a
                .vault
                .visible_links(query, folder)
                .into_iter()
                .map(|l| link_view(&a.vault, l, now))
                .collect();
            Ok(json!({"items": items, "total": a.vault.links().len()}))
        }

        // ─── Folders ───
        "folder.create" => {
            let name = str_param(params, "name").ok_or("missing name")?;
            let tag = match str_param(params, "tag") {
                Some(raw) => Some(raw.parse::<FolderTag>()?),
                None => None,
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let folder = a.vault.create_folder(name, tag).map_err(|e| e.to_string())?;
            Ok(folder_view(&a.vault, &folder, now_millis()))
        }
        "folder.rename" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let name = str_param(params, "name").ok_or("missing name")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a.vault.rename_folder(id, name).map_err(|e| e.to_string())?;
            Ok(match outcome {
                RenameOutcome::Renamed {
                    old_name,
                    new_name,
                    links_updated,
                } => json!({
                    "status": "renamed",
                    "oldName": old_name,
                    "newName": new_name,
                    "linksUpdated": links_updated,
                }),
                RenameOutcome::Unchanged => json!({"status": "unchanged"}),
                RenameOutcome::NotFound => json!({"status": "not_found"}),
            })
        }
        "folder.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let confirmed = params
                .get("confirmed")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a
                .vault
                .delete_folder(id, |_| confirmed)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "deleted": removed.is_some()}))
        }
        "folder.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let now = now_millis();
            let items: Vec<Value> = a
                .vault
                .folders_newest_first()
                .into_iter()
                .map(|f| folder_view(&a.vault, f, now))
                .collect();
            Ok(json!(items))
        }
        "folder.emoji" => Ok(json!({"emoji": folder_emoji(str_param(params, "tag"))})),

        // ─── Helpers ───
        "time.ago" => {
            let timestamp = params
                .get("timestamp")
                .and_then(|v| v.as_i64())
                .ok_or("missing timestamp")?;
            let now = params
                .get("now")
                .and_then(|v| v.as_i64())
                .unwrap_or_else(now_millis);
            Ok(json!({"text": time_ago(now, timestamp)}))
        }

        // ─── Theme ───
        "theme.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"darkMode": a.vault.dark_mode()}))
        }
        "theme.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let dark = a.vault.toggle_dark_mode().map_err(|e| e.to_string())?;
            Ok(json!({"darkMode": dark}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings().clone();
            a.vault.apply_settings(&settings);
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
