use tokenlist_core::{next_version, Version, VersionUpgrade};

use super::{emit, or_exit, GlobalOpts};

pub(crate) fn cmd_next(version: Version, bump: VersionUpgrade, opts: GlobalOpts) {
    let next = or_exit(next_version(version, bump).map_err(|e| e.to_string()), opts);
    emit(
        opts,
        || next.to_string(),
        || serde_json::json!({ "version": next.to_string(), "components": next }),
    );
}
