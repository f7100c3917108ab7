// CLI guard rails for catalog-nodes: default layout, flag overrides, the
// missing-directory exit path, and stdout discipline.
mod support;
#[path = "support/common.rs"]
mod common;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;

use common::{CHAT_NODE, Fixture, OPENAI_NODE};
use support::{catalog_command, run_command};

const DEFAULT_NODES: &str = "Flowise/packages/components/nodes";

#[test]
fn default_layout_writes_both_catalogs_under_cwd() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write(&format!("{DEFAULT_NODES}/chat/ChatNode.ts"), CHAT_NODE)?;
    fixture.write(
        &format!("{DEFAULT_NODES}/chatmodels/ChatOpenAI/ChatOpenAI.ts"),
        OPENAI_NODE,
    )?;

    let output = run_command(catalog_command(fixture.root()))?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout should only carry the summary: {stdout}");
    assert!(lines[0].starts_with("catalogued 2 nodes -> "));

    let json: Value = serde_json::from_str(&fs::read_to_string(
        fixture.root().join("catalog.flowise.nodes.json"),
    )?)?;
    let entries = json.as_array().context("catalog should be an array")?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["label"], "Chat Node");
    assert_eq!(
        entries[0]["path"],
        "Flowise/packages/components/nodes/chat/ChatNode.ts"
    );
    assert_eq!(entries[1]["category"], "chatmodels");

    let markdown = fs::read_to_string(fixture.root().join("catalog.flowise.nodes.md"))?;
    assert!(markdown.starts_with("# Flowise Node Catalog\nTotal: **2**\n"));
    Ok(())
}

#[test]
fn flags_override_root_and_outputs() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write("plugins/nodes/tools/Tool.mts", "class T implements IPlugin { label = 'T' }")?;
    fixture.write("plugins/nodes/tools/Other.ts", "class O implements IPlugin {}")?;
    let elsewhere = tempfile::TempDir::new()?;

    let mut cmd = catalog_command(elsewhere.path());
    cmd.arg("--root")
        .arg(fixture.root())
        .args(["--nodes-dir", "plugins/nodes"])
        .args(["--json-out", "out/nodes.json"])
        .args(["--markdown-out", "out/nodes.md"])
        .args(["--extension", ".mts"])
        .args(["--contract", "IPlugin"]);
    run_command(cmd)?;

    let json: Value =
        serde_json::from_str(&fs::read_to_string(fixture.root().join("out/nodes.json"))?)?;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["path"], "plugins/nodes/tools/Tool.mts");
    assert_eq!(json[0]["category"], "tools");
    assert!(fixture.root().join("out/nodes.md").is_file());
    assert!(!elsewhere.path().join("catalog.flowise.nodes.json").exists());
    Ok(())
}

#[test]
fn env_root_is_used_when_flag_is_absent() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write("nodes/chat/ChatNode.ts", CHAT_NODE)?;
    let elsewhere = tempfile::TempDir::new()?;

    let mut cmd = catalog_command(elsewhere.path());
    cmd.env("CATALOG_ROOT", fixture.root())
        .env("CATALOG_NODES_DIR", "nodes");
    run_command(cmd)?;

    assert!(fixture.root().join("catalog.flowise.nodes.json").is_file());
    assert!(fixture.root().join("catalog.flowise.nodes.md").is_file());
    Ok(())
}

#[test]
fn missing_nodes_dir_exits_non_zero_without_artifacts() -> Result<()> {
    let fixture = Fixture::new()?;
    let output = catalog_command(fixture.root())
        .output()
        .context("failed to run catalog-nodes")?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("components directory not found"),
        "stderr was: {stderr}"
    );
    assert!(stderr.contains("git clone"), "stderr was: {stderr}");
    assert!(!fixture.root().join("catalog.flowise.nodes.json").exists());
    assert!(!fixture.root().join("catalog.flowise.nodes.md").exists());
    Ok(())
}

#[test]
fn repeated_runs_are_byte_identical() -> Result<()> {
    let fixture = Fixture::new()?;
    for (i, category) in ["tools", "chat", "agents", "chat"].iter().enumerate() {
        fixture.write(
            &format!("nodes/{category}/Node{i}.ts"),
            &format!("class Node{i} implements INode {{ this.label = 'Node {i} | x' }}"),
        )?;
    }
    let json_path = fixture.root().join("catalog.flowise.nodes.json");
    let md_path = fixture.root().join("catalog.flowise.nodes.md");

    let mut first = catalog_command(fixture.root());
    first.args(["--nodes-dir", "nodes"]);
    run_command(first)?;
    let (json_a, md_a) = (fs::read(&json_path)?, fs::read(&md_path)?);

    let mut second = catalog_command(fixture.root());
    second.args(["--nodes-dir", "nodes"]);
    run_command(second)?;
    assert_eq!(fs::read(&json_path)?, json_a);
    assert_eq!(fs::read(&md_path)?, md_a);
    Ok(())
}

#[test]
fn help_lists_overrides() -> Result<()> {
    let fixture = Fixture::new()?;
    let mut cmd = catalog_command(fixture.root());
    cmd.arg("--help");
    let output = run_command(cmd)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--root", "--nodes-dir", "--json-out", "--markdown-out", "--verbose"] {
        assert!(stdout.contains(flag), "missing {flag} in help: {stdout}");
    }
    Ok(())
}
