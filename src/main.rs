use cidr_scope::cli::Cli;
use cidr_scope::commands::handle_check::run_check;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logger(args.debug);
    run(args)
}

/// ログはstderrへ出し、stdoutはレポート専用にする
fn init_logger(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// アプリケーションのメインロジック
/// 入力検証エラーもI/Oエラーも同じ形式でstderrに出し、終了コード1にする
fn run(args: Cli) -> ExitCode {
    match run_check(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
