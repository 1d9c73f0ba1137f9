//! Build tasks for the salat workspace.
//!
//! ```sh
//! cargo xtask dist-web         # wasm-pack for web + nodejs
//! cargo xtask dev-web          # dist-web plus a live countdown page
//! cargo xtask sync-versions    # workspace version -> package.json files
//! cargo xtask build-all        # sync, release build, dist-web
//! ```

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

const WASM_OUT_NAME: &str = "salat";
const NPM_PACKAGE: &str = "@salat/core";

/// Manifests that carry a copy of the workspace version.
const VERSIONED_MANIFESTS: &[&str] = &["pkg/package.json", "dist/web/package.json"];

#[derive(Debug, Clone, Copy)]
enum Task {
    DistWeb,
    DevWeb,
    SyncVersions,
    BuildAll,
}

impl FromStr for Task {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "dist-web" => Task::DistWeb,
            "dev-web" => Task::DevWeb,
            "sync-versions" => Task::SyncVersions,
            "build-all" => Task::BuildAll,
            other => bail!("unknown task `{}`", other),
        })
    }
}

const USAGE: &str = "\
usage: cargo xtask <task>

tasks:
    dist-web        wasm-pack build into dist/web/ (web) and pkg/ (nodejs)
    dev-web         dist-web, then a countdown test page in dist/dev/
    sync-versions   copy the workspace version into the package.json files
    build-all       sync-versions, release build of salat-core, dist-web
";

fn main() -> Result<()> {
    let Some(arg) = std::env::args().nth(1) else {
        print!("{}", USAGE);
        return Ok(());
    };
    if matches!(arg.as_str(), "-h" | "--help" | "help") {
        print!("{}", USAGE);
        return Ok(());
    }

    let task: Task = arg.parse().with_context(|| USAGE.to_string())?;
    let ws = Workspace::locate()?;

    match task {
        Task::DistWeb => ws.dist_web(),
        Task::DevWeb => ws.dev_web(),
        Task::SyncVersions => ws.sync_versions(),
        Task::BuildAll => ws.build_all(),
    }
}

struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// The xtask crate sits one level below the workspace root.
    fn locate() -> Result<Self> {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map(Path::to_path_buf)
            .context("xtask manifest has no parent directory")?;
        Ok(Self { root })
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        println!("$ {} {}  ({})", program, args.join(" "), dir.display());
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .status()
            .with_context(|| format!("could not launch {}", program))?;
        if !status.success() {
            bail!("{} exited with {}", program, status);
        }
        Ok(())
    }

    /// `version = "..."` under `[workspace.package]` in the root manifest.
    fn version(&self) -> Result<String> {
        let manifest = fs::read_to_string(self.path("Cargo.toml"))?;
        let mut in_package = false;
        for line in manifest.lines().map(str::trim) {
            if line.starts_with('[') {
                in_package = line == "[workspace.package]";
                continue;
            }
            if in_package && line.starts_with("version") {
                if let Some(v) = line.split('"').nth(1) {
                    return Ok(v.to_string());
                }
            }
        }
        bail!("no version in [workspace.package]")
    }

    fn sync_versions(&self) -> Result<()> {
        let version = self.version()?;
        for rel in VERSIONED_MANIFESTS {
            let path = self.path(rel);
            if path.exists() {
                set_json_version(&path, &version)?;
                println!("{} -> {}", rel, version);
            }
        }
        Ok(())
    }

    fn dist_web(&self) -> Result<()> {
        require_tool("wasm-pack", "cargo install wasm-pack")?;

        let crate_dir = self.path("bindings/salat_wasm");
        for (target, out) in [("web", "dist/web"), ("nodejs", "pkg")] {
            let out_dir = self.path(out).to_string_lossy().into_owned();
            self.run(&crate_dir, "wasm-pack", &[
                "build",
                "--target", target,
                "--out-dir", out_dir.as_str(),
                "--out-name", WASM_OUT_NAME,
            ])?;
        }

        // wasm-pack names the npm package after the crate.
        let manifest = self.path("pkg/package.json");
        if manifest.exists() {
            let text = fs::read_to_string(&manifest)?;
            fs::write(&manifest, text.replace("\"salat-wasm\"", &format!("\"{}\"", NPM_PACKAGE)))?;
        }
        Ok(())
    }

    fn dev_web(&self) -> Result<()> {
        self.dist_web()?;

        let dev = self.path("dist/dev");
        fs::create_dir_all(&dev)?;
        for entry in fs::read_dir(self.path("dist/web"))? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::copy(entry.path(), dev.join(entry.file_name()))?;
            }
        }
        fs::write(dev.join("index.html"), DEV_PAGE)?;

        println!("serve with: python -m http.server 8080 -d dist/dev");
        Ok(())
    }

    fn build_all(&self) -> Result<()> {
        self.sync_versions()?;
        self.run(&self.root, "cargo", &["build", "--release", "-p", "salat-core"])?;
        self.dist_web()?;
        // wasm-pack regenerates package.json with the crate's own version.
        self.sync_versions()
    }
}

fn require_tool(program: &str, install_hint: &str) -> Result<()> {
    let found = Command::new(program)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !found {
        bail!("{} not found on PATH (try `{}`)", program, install_hint);
    }
    Ok(())
}

/// Rewrites the first `"version"` line, keeping its indent and trailing comma.
fn set_json_version(path: &Path, version: &str) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let mut replaced = false;
    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            let key = line.trim_start();
            if !replaced && key.starts_with("\"version\"") {
                replaced = true;
                let indent = &line[..line.len() - key.len()];
                let comma = if key.trim_end().ends_with(',') { "," } else { "" };
                format!("{}\"version\": \"{}\"{}", indent, version, comma)
            } else {
                line.to_string()
            }
        })
        .collect();
    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

const DEV_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Salat - WASM Test</title>
    <style>
        body {
            font-family: system-ui, sans-serif; margin: 0; min-height: 100vh; color: #fff;
            display: flex; flex-direction: column; align-items: center; justify-content: center;
            background: linear-gradient(160deg, var(--gradient-from), var(--gradient-via), var(--gradient-to));
            transition: background 2s linear;
        }
        #countdown { font-size: 4rem; font-variant-numeric: tabular-nums; }
        #next { font-size: 1.5rem; opacity: 0.8; }
    </style>
</head>
<body>
    <div id="next">Loading...</div>
    <div id="countdown">--:--:--</div>
    <div id="progress"></div>

    <script type="module">
        import init, { SalatClock, resolveInstant } from './salat.js';

        await init();

        const zone = 'Africa/Cairo';
        const raw = { Fajr: '04:21', Sunrise: '05:52', Dhuhr: '11:58', Asr: '15:25', Maghrib: '18:03', Isha: '19:21' };
        const now = Date.now();
        const daily = {
            prayers: Object.entries(raw).map(([name, time]) => ({ name, time, timestamp: resolveInstant(time, now, zone) })),
            timezone: zone,
            fetchedAt: now,
        };
        const clock = new SalatClock(JSON.stringify(daily), 'dark');

        const paint = () => {
            const g = clock.ambient(Date.now());
            document.body.style.setProperty('--gradient-from', g.from);
            document.body.style.setProperty('--gradient-via', g.via);
            document.body.style.setProperty('--gradient-to', g.to);
        };
        const tick = () => {
            const c = clock.countdown(Date.now());
            document.getElementById('next').textContent = c.nextPrayer ?? 'Done for today';
            document.getElementById('countdown').textContent = c.label;
            document.getElementById('progress').textContent = `${c.progressPercent}%`;
        };

        paint();
        tick();
        setInterval(tick, 1000);
        setInterval(paint, 30000);
    </script>
</body>
</html>"#;
