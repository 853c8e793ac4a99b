use std::cmp::Ordering;

use tokenlist_core::{compare_versions, is_version_update, version_upgrade_between, Version};

use super::{emit, GlobalOpts};

pub(crate) fn cmd_compare(base: &Version, candidate: &Version, opts: GlobalOpts) {
    let ordering: i8 = match compare_versions(base, candidate) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    let is_update = is_version_update(base, candidate);
    let upgrade = version_upgrade_between(base, candidate);

    emit(
        opts,
        || {
            format!(
                "ordering: {}\nupdate: {}\nupgrade: {}",
                ordering, is_update, upgrade
            )
        },
        || {
            serde_json::json!({
                "ordering": ordering,
                "is_update": is_update,
                "upgrade": upgrade,
            })
        },
    );
}
