// crates/hd_configure/src/tree.rs

//! HYDRAD 目录树写出
//!
//! 先渲染全部产物，全部成功后再写文件，渲染失败时不会留下半套配置。

use hd_config::ConfigResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::artifact::Artifact;
use crate::configure::Configure;

/// HYDRAD 目录树
#[derive(Debug, Clone)]
pub struct HydradTree {
    root: PathBuf,
}

impl HydradTree {
    /// 以 `root` 为 HYDRAD 根目录
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 产物的完整路径
    pub fn path_of(&self, artifact: Artifact) -> PathBuf {
        self.root.join(artifact.relative_path())
    }

    /// 以同一生成时间渲染全部产物，跳过未配置的可选产物
    pub fn render_all(configure: &Configure) -> ConfigResult<Vec<(Artifact, String)>> {
        let snapshot = configure.snapshot();
        let mut rendered = Vec::with_capacity(Artifact::ALL.len());
        for artifact in Artifact::ALL {
            match snapshot.render(artifact)? {
                Some(text) => rendered.push((artifact, text)),
                None => debug!("跳过未配置的 {}", artifact),
            }
        }
        Ok(rendered)
    }

    /// 渲染并写出全部产物，返回写出的文件路径
    pub fn write(&self, configure: &Configure) -> ConfigResult<Vec<PathBuf>> {
        let rendered = Self::render_all(configure)?;
        let mut written = Vec::with_capacity(rendered.len());
        for (artifact, text) in rendered {
            let path = self.path_of(artifact);
            write_text(&path, &text)?;
            info!("写出 {}: {}", artifact, path.display());
            written.push(path);
        }
        Ok(written)
    }
}

fn write_text(path: &Path, text: &str) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
