// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Output formats and color.

use crate::prelude::*;

#[test]
fn json_output_lists_files() {
    let temp = Project::empty();
    temp.file("a.py", "import os\n");
    temp.file("b.py", &format!("{PY_HEADER}\nimport os\n"));

    let json = disclaimer()
        .pwd(temp.path())
        .args(&["-o", "json", "a.py", "b.py"])
        .exits(1)
        .json();

    assert_eq!(json["passed"], false);
    assert_eq!(json["failed"], serde_json::json!(["a.py"]));
    assert_eq!(json["files"][0]["status"], "absent");
    assert_eq!(json["files"][1]["status"], "present-correct");
    assert_eq!(json["files"][1]["filetype"], "python");
}

#[test]
fn json_output_after_fix_passes() {
    let temp = Project::empty();
    temp.file("a.py", "import os\n");

    let json = disclaimer()
        .pwd(temp.path())
        .args(&["-o", "json", "-f", "a.py"])
        .passes()
        .json();

    assert_eq!(json["passed"], true);
    assert_eq!(json["fixed"], serde_json::json!(["a.py"]));
}

#[test]
fn color_flag_emits_escape_codes() {
    let temp = Project::empty();
    temp.file("a.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["--color", "a.py"])
        .exits(1)
        .stdout_has("\x1b[");
}

#[test]
fn no_color_env_wins() {
    let temp = Project::empty();
    temp.file("a.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .args(&["a.py"])
        .exits(1)
        .stdout_lacks("\x1b[");
}
