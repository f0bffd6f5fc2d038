use std::{path::Path, process::Command};

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    // The embedded default config is compiled in with include_str!
    println!("cargo:rerun-if-changed=.config/config.json5");

    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_dir = Path::new(&git_dir);
        for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            let path = git_dir.join(watched);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }

    if let Some(describe) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={describe}");
    }
}
