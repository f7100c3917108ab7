#![allow(dead_code)]

use anyhow::{Context, Result};
use flowise_catalog::CatalogConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CHAT_NODE: &str = r#"class ChatNode implements INode { label = "Chat Node"; description = "Sends a chat message"; inputs = ["a","b"]; }"#;

pub const OPENAI_NODE: &str = r#"import { INode, INodeParams } from '../../../src/Interface'

class ChatOpenAI_ChatModels implements INode {
    label: string
    name: string
    description: string
    inputs: INodeParams[]

    constructor() {
        this.label = 'ChatOpenAI'
        this.name = 'chatOpenAI'
        this.description = 'Wrapper around OpenAI large language models that use the Chat endpoint'
        this.inputs = [
            {
                label: 'Model Name',
                name: 'modelName',
                type: 'options',
                options: [{ label: 'gpt-4', name: 'gpt-4' }]
            },
            {
                label: 'Temperature',
                name: 'temperature',
                type: 'number'
            }
        ]
    }
}

module.exports = { nodeClass: ChatOpenAI_ChatModels }
"#;

/// A throwaway catalog root laid out like a Flowise checkout.
pub struct Fixture {
    pub temp: TempDir,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("failed to allocate fixture root")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` at `rel` below the root, creating parents.
    pub fn write(&self, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Config whose components directory is `<root>/nodes`.
    pub fn config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::for_root(self.root());
        config.nodes_dir = self.root().join("nodes");
        config
    }
}

