//! # rename-project
//!
//! テンプレートから作成したプロジェクトの名前を一括で変更する。
//!
//! ## 使用方法
//!
//! ```bash
//! cargo run -p fastapi-template-renamer -- my-awesome-api
//!
//! # git 管理外のディレクトリで実行する場合
//! rename-project --finder walk --root ./my-project my-awesome-api
//! ```
//!
//! ## 終了コード
//!
//! | コード | 意味 |
//! |--------|------|
//! | 0 | 成功 |
//! | 1 | 引数エラー、または処理の失敗 |

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use fastapi_template_domain::identifier::{IdentifierTriple, ProjectName};
use fastapi_template_infra::{FinderKind, Workspace};
use fastapi_template_renamer::{
    ProjectRenamer,
    RenameReport,
    cli::{Cli, EXAMPLE},
};
use fastapi_template_shared::{LogWriter, TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            eprintln!("{EXAMPLE}");
            return ExitCode::FAILURE;
        }
    };

    let tracing_config = TracingConfig::from_env("rename-project").with_writer(LogWriter::Stderr);
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.span().entered();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("リネームに失敗しました: {:#}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let name = ProjectName::parse(cli.new_name.as_str()).context("新しいプロジェクト名が不正です")?;
    let to = IdentifierTriple::from_name(&name);

    let finder = FinderKind::from(cli.finder).build(&cli.root);
    let renamer = ProjectRenamer::new(finder, Workspace::new(&cli.root));
    let from = renamer.baseline().clone();

    println!("Renaming project from '{}' to '{}'", from.kebab(), to.kebab());

    let report = renamer.run(&to)?;
    print_summary(&from, &to, &report);

    Ok(())
}

fn print_summary(from: &IdentifierTriple, to: &IdentifierTriple, report: &RenameReport) {
    for path in &report.updated {
        println!("Updated content in: {}", path.display());
    }
    for path in &report.skipped {
        println!("Skipping binary file: {}", path.display());
    }
    for rename in &report.renamed {
        println!("Renamed: {} -> {}", rename.from.display(), rename.to.display());
    }
    for path in &report.removed {
        println!("Removed: {}", path.display());
    }

    println!();
    if report.is_unchanged() {
        println!("Nothing to rename: '{}' was not found", from.kebab());
    } else {
        println!("Project renamed successfully!");
    }
    println!("Old name: {from}");
    println!("New name: {to}");
    println!("Rebuild the workspace by running 'cargo build'");
}
