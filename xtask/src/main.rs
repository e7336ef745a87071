//! Build helpers: man pages and shell completions for `readease`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Generate readease documentation artifacts")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Write man pages (one per command) to DIR.
    Man {
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Write completion scripts for every supported shell to DIR.
    Completions {
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
    /// Both of the above under target/.
    Docs,
}

const BIN_NAME: &str = "readease";

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man_pages(&out),
        Task::Completions { out } => completions(&out),
        Task::Docs => {
            man_pages(Path::new("target/man"))?;
            completions(Path::new("target/completions"))
        }
    }
}

fn man_pages(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let cmd = readease::command();
    render_man(&cmd, BIN_NAME, out)?;
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("{BIN_NAME}-{}", sub.get_name());
        render_man(&sub.clone().name(name.clone()), &name, out)?;
    }

    println!("man pages written to {}", out.display());
    Ok(())
}

fn render_man(cmd: &clap::Command, name: &str, out: &Path) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {name}"))?;
    let path = out.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))
}

fn completions(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let mut cmd = readease::command();
    for &shell in Shell::value_variants() {
        let path = clap_complete::generate_to(shell, &mut cmd, BIN_NAME, out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
