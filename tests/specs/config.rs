// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Config file discovery and precedence.

use crate::prelude::*;

#[test]
fn license_and_owner_come_from_config() {
    let temp = Project::empty();
    temp.config(
        r#"
[disclaimer]
license = "Apache License 2.0"
owner = "Intel Corporation"
year = 2023
"#,
    );
    temp.file("app.py", "import os\n");

    disclaimer_bare()
        .pwd(temp.path())
        .args(&["-f", "app.py"])
        .passes();

    assert_eq!(temp.read("app.py"), format!("{PY_HEADER}\nimport os\n"));
}

#[test]
fn flags_override_config() {
    let temp = Project::empty();
    temp.config(
        r#"
[disclaimer]
license = "MIT"
owner = "Someone Else"
"#,
    );
    temp.file("app.py", "import os\n");

    disclaimer().pwd(temp.path()).args(&["-f", "app.py"]).passes();

    assert_eq!(temp.read("app.py"), format!("{PY_HEADER}\nimport os\n"));
}

#[test]
fn config_found_from_subdirectory() {
    let temp = Project::empty();
    temp.config("[disclaimer]\nlicense = \"MIT\"\nowner = \"Acme\"\n");
    temp.file("pkg/app.py", "import os\n");

    disclaimer_bare()
        .pwd(temp.path().join("pkg"))
        .args(&["app.py"])
        .exits(1)
        .stdout_has("app.py");
}

#[test]
fn unknown_key_warns_but_runs() {
    let temp = Project::empty();
    temp.config("[disclaimer]\ncolour = \"blue\"\n");
    temp.file("app.py", &format!("{PY_HEADER}\nimport os\n"));

    disclaimer()
        .pwd(temp.path())
        .args(&["app.py"])
        .passes()
        .stderr_has("unrecognized field `disclaimer.colour`");
}

#[test]
fn invalid_config_exits_2() {
    let temp = Project::empty();
    temp.config("version = 7\n");
    temp.file("app.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(2)
        .stderr_has("unsupported config version 7");
}

#[test]
fn explicit_config_via_env() {
    let temp = Project::empty();
    temp.file(
        "ci/lint.toml",
        "version = 1\n[disclaimer]\nlicense = \"Apache License 2.0\"\nowner = \"Intel Corporation\"\nyear = 2023\n",
    );
    temp.file("app.py", &format!("{PY_HEADER}\nimport os\n"));

    disclaimer_bare()
        .pwd(temp.path())
        .env("SIGOPTLINT_CONFIG", "ci/lint.toml")
        .args(&["app.py"])
        .passes();
}

#[test]
fn missing_explicit_config_exits_2() {
    let temp = Project::empty();
    temp.file("app.py", "import os\n");

    disclaimer()
        .pwd(temp.path())
        .args(&["-C", "nope.toml", "app.py"])
        .exits(2)
        .stderr_has("config file not found");
}
