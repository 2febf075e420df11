//! Integration tests for the kresolve binary

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_fixtures(dir: &Path) -> Result<(PathBuf, PathBuf, PathBuf)> {
    let global = dir.join("global.toml");
    let service = dir.join("service.toml");
    let product = dir.join("product.json");
    fs::write(
        &global,
        r#"
registry = "reg.example.com"

[node_selector]
zone = "a"
"#,
    )?;
    fs::write(
        &service,
        r#"
pull_policy = "Always"
"#,
    )?;
    fs::write(
        &product,
        r#"{
    "images": {
        "app": {
            "repoPath": "team",
            "name": "app",
            "tag": "1.0"
        }
    }
}"#,
    )?;
    Ok((global, service, product))
}

#[test]
fn test_version_command() -> Result<()> {
    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kresolve 0.1.0"));
    Ok(())
}

#[test]
fn test_version_subcommand() -> Result<()> {
    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kresolve 0.1.0"));
    Ok(())
}

#[test]
fn test_help_command() -> Result<()> {
    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "A layered configuration resolver for Kubernetes workload descriptors",
    ));
    Ok(())
}

#[test]
fn test_resolve_help() -> Result<()> {
    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("resolve").arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Resolve layered configuration into deployment parameters",
    ));
    Ok(())
}

#[test]
fn test_resolve_outputs_references() -> Result<()> {
    let dir = TempDir::new()?;
    let (global, service, product) = write_fixtures(dir.path())?;

    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("resolve")
        .arg("--global")
        .arg(&global)
        .arg("--service")
        .arg(&service)
        .arg("--product")
        .arg(&product);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reg.example.com/team/app:1.0"))
        .stdout(predicate::str::contains("\"imagePullPolicy\": \"Always\""));
    Ok(())
}

#[test]
fn test_resolve_writes_output_file() -> Result<()> {
    let dir = TempDir::new()?;
    let (global, service, product) = write_fixtures(dir.path())?;
    let output = dir.path().join("resolved.json");

    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("resolve")
        .arg("--global")
        .arg(&global)
        .arg("--service")
        .arg(&service)
        .arg("--product")
        .arg(&product)
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let rendered = fs::read_to_string(&output)?;
    assert!(rendered.contains("reg.example.com/team/app:1.0"));
    Ok(())
}

#[test]
fn test_resolve_apparmor_annotation_flag() -> Result<()> {
    let dir = TempDir::new()?;
    let (global, service, product) = write_fixtures(dir.path())?;

    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("resolve")
        .arg("--global")
        .arg(&global)
        .arg("--service")
        .arg(&service)
        .arg("--product")
        .arg(&product)
        .arg("--apparmor-annotation");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"appArmorAnnotation\": \"runtime/default\""));
    Ok(())
}

#[test]
fn test_resolve_selector_conflict_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let (global, _, product) = write_fixtures(dir.path())?;

    let service = dir.path().join("conflicting.toml");
    fs::write(
        &service,
        r#"
[node_selector]
zone = "b"
"#,
    )?;

    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.arg("resolve")
        .arg("--global")
        .arg(&global)
        .arg("--service")
        .arg(&service)
        .arg("--product")
        .arg(&product);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("conflicting node selector values"))
        .stderr(predicate::str::contains("zone"));
    Ok(())
}

#[test]
fn test_resolve_requires_product() -> Result<()> {
    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.env_remove("KRESOLVE_PRODUCT");
    cmd.arg("resolve");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn test_resolve_product_from_env() -> Result<()> {
    let dir = TempDir::new()?;
    let (global, service, product) = write_fixtures(dir.path())?;

    let mut cmd = Command::cargo_bin("kresolve")?;
    cmd.env("KRESOLVE_PRODUCT", &product);
    cmd.arg("resolve")
        .arg("--global")
        .arg(&global)
        .arg("--service")
        .arg(&service);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reg.example.com/team/app:1.0"));
    Ok(())
}
