//! 终端预览的配置
//!
//! 读取 `<config_dir>/portfolio/tui.json`，命令行参数优先。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_core::SiteConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "portfolio-tui", version, about = "Preview a portfolio site in the terminal")]
pub struct Args {
    /// 站点描述 JSON（缺省使用配置文件中的路径，再缺省使用内置演示站点）
    #[arg(long, value_name = "PATH")]
    pub site: Option<PathBuf>,

    /// 配色主题
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// 打印实际使用的站点描述后退出
    #[arg(long)]
    pub dump_site: bool,
}

/// 配置文件内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TuiConfig {
    pub theme: Theme,
    pub site: Option<PathBuf>,
}

impl TuiConfig {
    /// 配置文件路径
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio").join("tui.json"))
    }

    /// 加载配置；文件不存在时使用默认值
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// 合并命令行参数
    pub fn merge(mut self, args: &Args) -> Self {
        if let Some(theme) = args.theme {
            self.theme = theme;
        }
        if let Some(site) = &args.site {
            self.site = Some(site.clone());
        }
        self
    }

    /// 加载站点描述
    pub fn load_site(&self) -> Result<SiteConfig> {
        match &self.site {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read site {}", path.display()))?;
                SiteConfig::from_json_str(&text)
                    .with_context(|| format!("invalid site description {}", path.display()))
            }
            None => Ok(SiteConfig::demo()?),
        }
    }
}
