use std::path::Path;
use std::process;

use tokenlist_core::check_release;

use super::{emit, or_exit, GlobalOpts};
use crate::load::load_document;

pub(crate) fn cmd_check(base_path: &Path, update_path: &Path, opts: GlobalOpts) {
    let base = or_exit(load_document(base_path, opts.strict), opts);
    let update = or_exit(load_document(update_path, opts.strict), opts);

    let check = or_exit(check_release(&base, &update).map_err(|e| e.to_string()), opts);
    emit(opts, || check.to_text(), || check.to_json());

    if !check.is_sufficient() {
        tracing::warn!(
            declared = %check.declared_version,
            minimum = %check.minimum_version,
            "declared version does not cover the token changes"
        );
        process::exit(1);
    }
}
