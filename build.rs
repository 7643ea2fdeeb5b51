use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 前端未构建时写入的占位页面，保证 rust-embed 目录存在
const PLACEHOLDER_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>%SYSTEM_NAME%</title>
</head>
<body style="font-family: sans-serif; max-width: 640px; margin: 80px auto;">
    <h1>%SYSTEM_NAME%</h1>
    <p>教师端页面尚未构建，JSON API 仍可通过 <code>/api</code> 访问。</p>
    <p>构建前端：<code>cd frontend &amp;&amp; bun install &amp;&amp; bun run build</code></p>
</body>
</html>
"#;

fn main() {
    println!("cargo:rerun-if-changed=frontend/dist");

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:warning=CARGO_MANIFEST_DIR is not set");
        return;
    };
    let dist: PathBuf = Path::new(&manifest_dir).join("frontend").join("dist");

    if dist.join("index.html").exists() {
        return;
    }

    println!("cargo:warning=frontend/dist not found, embedding a placeholder page");
    if let Err(e) = write_placeholder(&dist) {
        println!("cargo:warning=failed to write placeholder frontend: {e}");
    }
}

fn write_placeholder(dist: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dist.join("assets"))?;
    fs::write(dist.join("index.html"), PLACEHOLDER_INDEX)
}
