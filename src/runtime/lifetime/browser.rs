use std::process::Command;
use tracing::{info, warn};

/// 按平台选择打开浏览器的命令
fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd",
            vec![
                "/c".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// 在默认浏览器中打开页面，失败只记录警告
pub fn open_in_browser(url: &str) {
    let (program, args) = browser_command(url);

    match Command::new(program).args(&args).spawn() {
        Ok(_) => info!("Opened {} in the default browser", url),
        Err(e) => warn!("Failed to open browser with {}: {}", program, e),
    }
}
