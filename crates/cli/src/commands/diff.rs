use std::path::Path;
use std::process;

use tokenlist_core::diff_token_lists;

use super::{emit, or_exit, GlobalOpts};
use crate::load::load_list;

pub(crate) fn cmd_diff(base_path: &Path, update_path: &Path, opts: GlobalOpts) {
    let base = or_exit(load_list(base_path, opts.strict), opts);
    let update = or_exit(load_list(update_path, opts.strict), opts);

    let diff = diff_token_lists(base.tokens(), update.tokens());
    tracing::info!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        changed = diff.changed_count(),
        "diff complete"
    );

    if diff.is_empty() {
        emit(opts, || "no differences".to_string(), || diff.to_json());
    } else {
        emit(opts, || diff.to_text(), || diff.to_json());
        process::exit(1);
    }
}
