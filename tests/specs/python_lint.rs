// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Built-in Python rules, disable comments and the external linter.

use crate::prelude::*;

const TUPLE_MESSAGE: &str = "Prefer `tuple` for single-element tuples";

#[test]
fn no_files_exits_zero_without_running() {
    let temp = Project::empty();
    temp.config("[python]\ncommand = [\"definitely-not-a-real-linter-binary\"]\n");

    python_lint().pwd(temp.path()).passes();
}

#[test]
fn clean_file_passes() {
    let temp = Project::empty();
    temp.file("a.py", "import os\n\nprint(os.sep)\n");

    python_lint().pwd(temp.path()).args(&["a.py"]).passes().stdout_eq("");
}

#[test]
fn default_rules_report_findings() {
    let temp = Project::empty();
    temp.file("a.py", "x = 1,\n");

    python_lint()
        .pwd(temp.path())
        .args(&["a.py"])
        .exits(1)
        .stdout_eq(&format!("a.py:1:0: {TUPLE_MESSAGE}\n"));
}

#[test]
fn include_enables_optional_rule() {
    let temp = Project::empty();
    temp.file("a.py", "import datetime\nstamp = datetime.datetime.now()\n");

    python_lint().pwd(temp.path()).args(&["a.py"]).passes();
    python_lint()
        .pwd(temp.path())
        .args(&["--include", "AvoidDatetimeNowRule", "a.py"])
        .exits(1)
        .stdout_has("a.py:2:8: Prefer `current_datetime` to `datetime.now`");
}

#[test]
fn ignore_disables_default_rule() {
    let temp = Project::empty();
    temp.file("a.py", "x = 1,\n");

    python_lint()
        .pwd(temp.path())
        .args(&["--ignore=TrailingCommaRule", "a.py"])
        .passes();
}

#[test]
fn disable_comment_silences_rule() {
    let temp = Project::empty();
    temp.file("a.py", "# sigoptlint: disable=TrailingCommaRule\nx = 1,\n");

    python_lint().pwd(temp.path()).args(&["a.py"]).passes();
}

#[test]
fn enable_comment_fails_the_file() {
    let temp = Project::empty();
    temp.file("a.py", "# sigoptlint: enable=TrailingCommaRule\n");

    python_lint()
        .pwd(temp.path())
        .args(&["a.py"])
        .exits(1)
        .stderr_has("a.py:1: Re-enabling sigoptlint disables is not supported");
}

#[test]
fn unknown_rule_exits_2() {
    let temp = Project::empty();
    temp.file("a.py", "import os\n");

    python_lint()
        .pwd(temp.path())
        .args(&["--include", "E501", "a.py"])
        .exits(2)
        .stderr_has("unknown python lint rule `E501`");
}

#[cfg(unix)]
#[test]
fn propagates_external_linter_exit_code() {
    let temp = Project::empty();
    temp.config("[python]\ncommand = [\"sh\", \"-c\", \"exit 3\"]\n");
    temp.file("a.py", "import os\n");

    python_lint().pwd(temp.path()).args(&["a.py"]).exits(3);
}

#[cfg(unix)]
#[test]
fn external_linter_runs_after_builtin_findings() {
    let temp = Project::empty();
    temp.config("[python]\ncommand = [\"true\"]\n");
    temp.file("a.py", "x = 1,\n");

    python_lint()
        .pwd(temp.path())
        .args(&["a.py"])
        .exits(1)
        .stdout_has(TUPLE_MESSAGE);
}

#[test]
fn missing_linter_exits_2() {
    let temp = Project::empty();
    temp.config("[python]\ncommand = [\"definitely-not-a-real-linter-binary\"]\n");
    temp.file("a.py", "import os\n");

    python_lint()
        .pwd(temp.path())
        .args(&["a.py"])
        .exits(2)
        .stderr_has("failed to run `definitely-not-a-real-linter-binary`");
}
