use crate::cli::Cli;
use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::output::{render_report, write_report};
use crate::parse::CidrBlock;
use crate::process::{CheckResult, check_addresses, parse_address_lines, parse_cidr_range};
use rayon::ThreadPoolBuilder;
use std::fs;

/// 判定モードのメイン処理。
/// 判定できなかったアドレスが1件でもあれば Ok(false) を返す。
pub fn run_check(args: &Cli) -> Result<bool, AppError> {
    // CIDRが不正ならアドレスを1件も判定せずに中断する
    let block = parse_cidr_range(&args.cidr)?;
    let candidates = collect_candidates(args)?;
    if candidates.is_empty() {
        return Err(AppError::InvalidInput(
            "No IP addresses were given to check".into(),
        ));
    }

    let results = check_with_pool(&block, &candidates, args.concurrency)?;
    let failed = results.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        debug_log(format!("{} of {} address(es) were invalid", failed, results.len()));
    }

    let format = OutputFormat::from_str(&args.output_format);
    let report = render_report(&block, &results, format, args.show_range)?;
    write_report(args.output.as_ref(), &report)?;

    Ok(failed == 0)
}

/// --ip と --file の両方から判定対象を集める (--ip が先)
fn collect_candidates(args: &Cli) -> Result<Vec<String>, AppError> {
    let mut candidates = args.ip_addresses.clone().unwrap_or_default();
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)?;
        let from_file = parse_address_lines(&text);
        debug_log(format!(
            "Read {} address(es) from {}",
            from_file.len(),
            path.display()
        ));
        candidates.extend(from_file);
    }
    Ok(candidates)
}

/// concurrency が0ならrayonのグローバルプールをそのまま使う
fn check_with_pool(
    block: &CidrBlock,
    candidates: &[String],
    concurrency: usize,
) -> Result<Vec<CheckResult>, AppError> {
    if concurrency == 0 {
        return Ok(check_addresses(block, candidates));
    }
    let pool = ThreadPoolBuilder::new().num_threads(concurrency).build()?;
    Ok(pool.install(|| check_addresses(block, candidates)))
}
