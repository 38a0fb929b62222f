use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary with an empty config home so a user's config can't leak in.
fn swatchboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("swatchboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn swatchboard_help_prints_usage() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Color palette with delegated click handling",
        ));
}

#[test]
fn no_clicks_reports_no_selection() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--count", "5"])
        .assert()
        .success()
        .stdout("No color selected\n");
}

#[test]
fn pick_prints_selected_color() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--count", "5", "--seed", "1", "--pick", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Selected color: #[0-9a-f]{6}\n$").unwrap());
}

#[test]
fn same_seed_gives_same_palette() {
    let home = TempDir::new().unwrap();
    let run = || {
        swatchboard_cmd(&home)
            .args(["--count", "12", "--seed", "99", "--pick", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn click_outside_swatches_keeps_previous_selection() {
    let home = TempDir::new().unwrap();
    let picked = swatchboard_cmd(&home)
        .args(["--seed", "3", "--pick", "0"])
        .output()
        .unwrap()
        .stdout;

    // The pick comes first; (1, 1) is page margin and (17, 17) is container padding
    swatchboard_cmd(&home)
        .args(["--seed", "3", "--pick", "0", "--click", "1,1", "--click", "17,17"])
        .assert()
        .success()
        .stdout(picked);
}

#[test]
fn later_pick_replaces_earlier_one() {
    let home = TempDir::new().unwrap();
    let last = swatchboard_cmd(&home)
        .args(["--seed", "8", "--pick", "2"])
        .output()
        .unwrap()
        .stdout;

    swatchboard_cmd(&home)
        .args(["--seed", "8", "--pick", "5", "--pick", "2"])
        .assert()
        .success()
        .stdout(last);
}

#[test]
fn click_after_pick_selects_clicked_swatch() {
    let home = TempDir::new().unwrap();
    let first = swatchboard_cmd(&home)
        .args(["--seed", "21", "--pick", "0"])
        .output()
        .unwrap()
        .stdout;

    // The first swatch starts at margin + padding = (28, 28)
    swatchboard_cmd(&home)
        .args(["--seed", "21", "--pick", "3", "--click", "30,30"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn pick_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--count", "3", "--pick", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No swatch at index 10 (palette has 3 swatches)",
        ));
}

#[test]
fn zero_count_is_rejected() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--count", "0"])
        .assert()
        .failure();
}

#[test]
fn malformed_click_is_rejected() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--click", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}

#[test]
fn config_file_sets_palette_size() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[palette]\ncount = 2\nseed = 5\n").unwrap();

    swatchboard_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["--pick", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Selected color: #"));

    swatchboard_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["--pick", "2"])
        .assert()
        .failure();
}

#[test]
fn default_config_location_is_used() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("swatchboard");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[palette]\ncount = 1\n").unwrap();

    swatchboard_cmd(&home)
        .args(["--pick", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("palette has 1 swatches"));
}

#[test]
fn preview_ends_with_output_line() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--count", "4", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("No color selected\n"));
}

#[test]
fn bubbling_demo_lists_handlers_inside_out() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--demo", "bubbling"])
        .assert()
        .success()
        .stdout(
            "div#descendant click handler (at target)\n\
             div#child click handler (bubbling)\n\
             div#parent click handler (bubbling)\n",
        );
}

#[test]
fn demo_conflicts_with_clicks() {
    let home = TempDir::new().unwrap();
    swatchboard_cmd(&home)
        .args(["--demo", "capture", "--pick", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn dump_config_schema_prints_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"palette\"").and(predicate::str::contains("\"render\"")));
}
