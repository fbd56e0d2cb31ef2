// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Checking and fixing disclaimers end to end.

use crate::prelude::*;

// =============================================================================
// CHECK MODE
// =============================================================================

#[test]
fn compliant_file_passes_untouched() {
    let temp = Project::empty();
    let content = format!("{PY_HEADER}\nimport os\n");
    temp.file("app.py", &content);

    disclaimer()
        .pwd(temp.path())
        .args(&["app.py"])
        .passes()
        .stdout_eq("PASS: 1 file checked, 0 fixed, 0 failed\n");

    assert_eq!(temp.read("app.py"), content);
}

#[test]
fn missing_disclaimer_fails_without_writing() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(1)
        .stdout_eq(
            "The following files failed the copyright + license check:\n\
             \tapp.py\n\
             FAIL: 1 file checked, 0 fixed, 1 failed\n",
        );

    assert_eq!(temp.read("app.py"), "import os\n");
}

#[test]
fn directory_target_reports_every_failing_file() {
    let temp = Project::empty();
    temp.file("src/a.py", "import os\n");
    temp.file("src/b.sh", "echo hi\n");
    temp.file("src/notes.txt", "no comment syntax\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["src"])
        .exits(1)
        .stdout_has("a.py")
        .stdout_has("b.sh")
        .stdout_lacks("notes.txt")
        .stdout_has("FAIL: 2 files checked, 0 fixed, 2 failed");

    assert_eq!(temp.read("src/a.py"), "import os\n");
}

#[test]
fn wrong_owner_is_present_incorrect() {
    let temp = Project::empty();
    temp.file(
        "app.py",
        "# Copyright © 2023 Someone Else\n#\n# SPDX-License-Identifier: Apache License 2.0\nimport os\n",
    );

    let json = disclaimer()
        .pwd(temp.path())
        .args(&["app.py", "-o", "json"])
        .exits(1)
        .json();

    assert_eq!(json["files"][0]["status"], "present-incorrect");
}

#[test]
fn missing_target_is_reported_and_others_still_checked() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["-f", "missing.py", "app.py"])
        .exits(1)
        .stdout_has("ERROR")
        .stdout_has("missing.py");

    assert_eq!(temp.read("app.py"), format!("{PY_HEADER}\nimport os\n"));
}

// =============================================================================
// FIX MODE
// =============================================================================

#[test]
fn fix_inserts_disclaimer_and_exits_zero() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["--fix-in-place", "app.py"])
        .passes()
        .stdout_eq("FIXED app.py\nPASS: 1 file checked, 1 fixed, 0 failed\n");

    assert_eq!(temp.read("app.py"), format!("{PY_HEADER}\nimport os\n"));
}

#[test]
fn fix_is_idempotent() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer().pwd(temp.path()).args(&["-f", "app.py"]).passes();
    let first = temp.read("app.py");

    disclaimer()
        .pwd(temp.path())
        .args(&["-f", "app.py"])
        .passes()
        .stdout_lacks("FIXED");
    assert_eq!(temp.read("app.py"), first);
}

#[test]
fn fix_keeps_shebang_first() {
    let temp = Project::empty();
    temp.file("run.sh", "#!/usr/bin/env bash\necho hi\n");

    disclaimer().pwd(temp.path()).args(&["-f", "run.sh"]).passes();

    assert_eq!(
        temp.read("run.sh"),
        format!("#!/usr/bin/env bash\n{PY_HEADER}\necho hi\n")
    );
}

#[test]
fn fix_replaces_stale_disclaimer() {
    let temp = Project::empty();
    temp.file(
        "app.py",
        "# Copyright © 2019 Intel Corporation\n#\n# SPDX-License-Identifier: MIT\n\nimport os\n",
    );

    disclaimer().pwd(temp.path()).args(&["-f", "app.py"]).passes();

    assert_eq!(temp.read("app.py"), format!("{PY_HEADER}\nimport os\n"));
}

#[test]
fn fix_on_empty_python_file_writes_disclaimer_only() {
    let temp = Project::empty();
    temp.file("__init__.py", "");

    disclaimer()
        .pwd(temp.path())
        .args(&["-f", "__init__.py"])
        .passes();

    assert_eq!(temp.read("__init__.py"), PY_HEADER);
}

#[test]
fn block_comment_disclaimer_for_markdown() {
    let temp = Project::empty();
    temp.file("README.md", "# Title\n");

    disclaimer().pwd(temp.path()).args(&["-f", "README.md"]).passes();

    assert_eq!(
        temp.read("README.md"),
        "<!--\nCopyright © 2023 Intel Corporation\n\nSPDX-License-Identifier: Apache License 2.0\n-->\n\n# Title\n"
    );
}

#[cfg(unix)]
#[test]
fn fix_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = Project::empty();
    temp.file("run.sh", "#!/bin/sh\necho hi\n");
    let path = temp.path().join("run.sh");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    disclaimer().pwd(temp.path()).args(&["-f", "run.sh"]).passes();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn exclude_skips_matching_paths() {
    let temp = Project::empty();
    temp.file("src/app.py", "import os\n");
    temp.file("vendor/lib.py", "import sys\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["-f", "--exclude", "vendor/**", "."])
        .passes();

    assert_eq!(temp.read("vendor/lib.py"), "import sys\n");
    assert_eq!(temp.read("src/app.py"), format!("{PY_HEADER}\nimport os\n"));
}

#[test]
fn verbose_lists_checked_files_on_stderr() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["-v", "-f", "app.py"])
        .passes()
        .stderr_has("[verbose] Checking: app.py")
        .stderr_has("[verbose] Fixing app.py")
        .stderr_has("[verbose] All files have disclaimer");
}

// =============================================================================
// ARGUMENT ERRORS
// =============================================================================

#[test]
fn missing_license_is_config_error_and_touches_nothing() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer_bare()
        .pwd(temp.path())
        .args(&["--owner=Intel Corporation", "-f", "app.py"])
        .exits(2)
        .stderr_has("missing license");

    assert_eq!(temp.read("app.py"), "import os\n");
}

#[test]
fn invalid_year_is_usage_error() {
    let temp = Project::empty();
    disclaimer_bare()
        .pwd(temp.path())
        .args(&["--license=MIT", "--owner=Acme", "--year=23", "."])
        .exits(2);
}
