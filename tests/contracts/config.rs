//! Contract: configuration layers reach the composition root in order
//! (defaults < user < project < environment < command line).

use crate::common::TestEnv;

/// CONTRACT: a project config requesting another major version makes
/// composition fail, while `modules` still reports each module.
#[test]
fn contract_project_version_reaches_module_loading() {
    let env = TestEnv::new();
    env.write_project_config("[deployment]\nversion = \"15.0.0.0\"\n");

    let catalog = env.run(&["catalog"]);
    assert!(!catalog.success);
    assert!(
        catalog.stderr.contains("failed to load module 'editor.platform, Version=15.0.0.0"),
        "stderr: {}",
        catalog.stderr
    );

    let modules = env.run(&["modules"]);
    assert!(modules.success, "stderr: {}", modules.stderr);
    assert!(modules.stdout.contains("requests version 15.0.0.0"));
    assert!(!modules.stdout.contains("export(s)"));
}

/// CONTRACT: `EDITOR_HOST_VERSION` overrides the project file.
#[test]
fn contract_env_version_overrides_project() {
    let env = TestEnv::new();
    env.write_project_config("[deployment]\nversion = \"15.0.0.0\"\n");

    let result = env.run_with_env(&["catalog"], &[("EDITOR_HOST_VERSION", "14.2.0.0")]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("Catalog (10 exports, 3 overrides)"));
}

/// CONTRACT: an invalid environment value warns and keeps the configured one.
#[test]
fn contract_invalid_env_value_falls_back() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["modules", "-v"], &[("EDITOR_HOST_VERSION", "latest")]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stderr
        .contains("Warning: Invalid EDITOR_HOST_VERSION value 'latest'"));
    assert!(result.stdout.contains("Version=14.0.0.0"));
}

/// CONTRACT: `--deployment-version` wins over every other layer.
#[test]
fn contract_cli_version_wins() {
    let env = TestEnv::new();
    env.write_project_config("[deployment]\nversion = \"14.0.0.0\"\n");

    let result = env.run_with_env(
        &["catalog", "--deployment-version", "13.0.0.0"],
        &[("EDITOR_HOST_VERSION", "14.0.0.0")],
    );
    assert!(!result.success);
    assert!(result.stderr.contains("Version=13.0.0.0"), "stderr: {}", result.stderr);
}

/// CONTRACT: unknown config keys warn on stderr but never fail the command.
#[test]
fn contract_unknown_keys_warn() {
    let env = TestEnv::new();
    env.write_project_config("[system_colors]\nhilight = \"#FFFFFF\"\n");

    let result = env.run(&["options"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("unknown config key"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("did you mean 'highlight'?"));
}

/// CONTRACT: a malformed config file is an error, not a silent default.
#[test]
fn contract_invalid_config_fails() {
    let env = TestEnv::new();
    env.write_project_config("[system_colors]\nwindow = \"white\"\n");

    let result = env.run(&["colors"]);
    assert!(!result.success);
    assert!(result.stderr.contains("invalid config"), "stderr: {}", result.stderr);
}

/// CONTRACT: system color overrides feed the fallback color storage.
#[test]
fn contract_palette_overrides_reach_colors() {
    let env = TestEnv::new();
    env.write_project_config("[system_colors]\nhighlight = \"#0078D7\"\n");

    let result = env.run(&["colors", "Selected Text"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("background #0078D7"), "stdout: {}", result.stdout);
}

/// CONTRACT: the project layer overrides the user layer key by key.
#[cfg(target_os = "linux")]
#[test]
fn contract_project_overrides_user() {
    let env = TestEnv::new();
    env.write_user_config("[system_colors]\nwindow = \"#111111\"\nhighlight = \"#222222\"\n");
    env.write_project_config("[system_colors]\nhighlight = \"#333333\"\n");

    let result = env.run(&["colors", "TextView Background", "Selected Text"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("background #111111"), "stdout: {}", result.stdout);
    assert!(result.stdout.contains("background #333333"), "stdout: {}", result.stdout);
    assert!(!result.stdout.contains("#222222"));
}

/// CONTRACT: an invalid `--deployment-version` is rejected before any module loads.
#[test]
fn contract_invalid_cli_version_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&["catalog", "--deployment-version", "latest"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("not a dotted numeric version"),
        "stderr: {}",
        result.stderr
    );
    assert!(!result.stderr.contains("failed to load module"));
}
