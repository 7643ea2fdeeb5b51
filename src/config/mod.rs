//! 配置管理
//!
//! 配置来源按优先级从低到高：`config.toml` → `config.{APP_ENV}.toml` → `EDUMATE_*` 环境变量
//! → 常用环境变量覆盖（`DATABASE_URL`、`SERVER_PORT` 等）。

mod r#impl;
mod structs;

pub use structs::*;
