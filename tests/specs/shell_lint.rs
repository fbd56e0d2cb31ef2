// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Required shell directives.

use crate::prelude::*;

#[test]
fn complete_script_passes() {
    let temp = Project::empty();
    temp.file(
        "run.sh",
        "#!/usr/bin/env bash\nset -e\nset -o pipefail\necho hi\n",
    );

    shell_lint()
        .pwd(temp.path())
        .args(&["run.sh"])
        .passes()
        .stdout_eq("");
}

#[test]
fn reports_each_missing_directive() {
    let temp = Project::empty();
    temp.file("run.sh", "#!/bin/sh\necho hi\n");

    shell_lint()
        .pwd(temp.path())
        .args(&["run.sh"])
        .exits(1)
        .stdout_eq(
            "run.sh: error: Missing `set -e` directive.\n\
             run.sh: error: Missing `set -o pipefail` directive.\n\
             run.sh: error: Missing `#!/usr/bin/env bash` directive.\n",
        );
}

#[test]
fn opt_out_comments_are_accepted() {
    let temp = Project::empty();
    temp.file(
        "run.sh",
        "#!/usr/bin/env sh\n# no_set_e\n# no_pipefail\necho hi\n",
    );

    shell_lint().pwd(temp.path()).args(&["run.sh"]).passes();
}

#[test]
fn unreadable_file_is_reported() {
    let temp = Project::empty();

    shell_lint()
        .pwd(temp.path())
        .args(&["missing.sh"])
        .exits(1)
        .stdout_has("missing.sh: error:");
}

#[test]
fn no_files_passes() {
    let temp = Project::empty();
    shell_lint().pwd(temp.path()).passes();
}
