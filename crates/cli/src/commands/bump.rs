use std::path::Path;

use tokenlist_core::{minimum_version_bump, next_version};

use super::{emit, or_exit, GlobalOpts};
use crate::load::load_list;

pub(crate) fn cmd_bump(base_path: &Path, update_path: &Path, opts: GlobalOpts) {
    let base = or_exit(load_list(base_path, opts.strict), opts);
    let update = or_exit(load_list(update_path, opts.strict), opts);

    let bump = minimum_version_bump(base.tokens(), update.tokens());
    // A bare token array has no version to bump from
    let versions = base.document().map(|doc| {
        let next = or_exit(next_version(doc.version, bump).map_err(|e| e.to_string()), opts);
        (doc.version, next)
    });

    emit(
        opts,
        || match versions {
            Some((from, to)) => format!("{} ({} -> {})", bump, from, to),
            None => bump.to_string(),
        },
        || {
            let mut value = serde_json::json!({ "bump": bump });
            if let Some((from, to)) = versions {
                value["base_version"] = serde_json::json!(from.to_string());
                value["next_version"] = serde_json::json!(to.to_string());
            }
            value
        },
    );
}
