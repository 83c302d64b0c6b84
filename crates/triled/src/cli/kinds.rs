//! `kinds` subcommand — list the light kinds the service handles.

use triled_lib::service::SUPPORTED_KINDS;

use super::Result;

pub(super) fn cmd_kinds(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&SUPPORTED_KINDS).unwrap());
    } else {
        for kind in SUPPORTED_KINDS {
            println!("{kind}");
        }
    }
    Ok(())
}
