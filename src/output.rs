use crate::common::OutputFormat;
use crate::constants::RESULT_LINE_PREFIX;
use crate::error::AppError;
use crate::parse::CidrBlock;
use crate::parse_ipv4::Ipv4Address;
use crate::process::CheckResult;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// --show-range 指定時に出力するブロックの情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    pub network: Ipv4Address,
    pub netmask: Ipv4Address,
    pub low: Ipv4Address,
    pub high: Ipv4Address,
    pub size: u64,
}

impl RangeSummary {
    pub fn from_block(block: &CidrBlock) -> Self {
        let range = block.range();
        RangeSummary {
            network: block.network(),
            netmask: block.netmask(),
            low: range.low(),
            high: range.high(),
            size: range.size(),
        }
    }
}

/// JSON出力のルート
#[derive(Debug, Serialize)]
struct Report<'a> {
    cidr: &'a CidrBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<RangeSummary>,
    results: &'a [CheckResult],
}

/// TXT出力用のヘッダー生成
pub fn make_header(block: &CidrBlock) -> String {
    let s = RangeSummary::from_block(block);
    format!(
        "# CIDR: {}\n# Network: {}\n# Netmask: {}\n# Range: {} - {}\n# Addresses: {}\n\n",
        block, s.network, s.netmask, s.low, s.high, s.size
    )
}

/// 1件分の判定結果を1行にする
pub fn format_result_line(block: &CidrBlock, result: &CheckResult) -> String {
    let verdict = match (&result.in_range, &result.error) {
        (_, Some(e)) => format!("error: {}", e),
        (Some(b), None) => b.to_string(),
        (None, None) => "unknown".to_string(),
    };
    format!(
        "{} {} in {} -> {}",
        RESULT_LINE_PREFIX, result.address, block, verdict
    )
}

pub fn render_txt(block: &CidrBlock, results: &[CheckResult], show_range: bool) -> String {
    let mut content = String::new();
    if show_range {
        content.push_str(&make_header(block));
    }
    for r in results {
        content.push_str(&format_result_line(block, r));
        content.push('\n');
    }
    content
}

pub fn render_json(
    block: &CidrBlock,
    results: &[CheckResult],
    show_range: bool,
) -> Result<String, AppError> {
    let report = Report {
        cidr: block,
        range: show_range.then(|| RangeSummary::from_block(block)),
        results,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

pub fn render_report(
    block: &CidrBlock,
    results: &[CheckResult],
    format: OutputFormat,
    show_range: bool,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Txt => Ok(render_txt(block, results, show_range)),
        OutputFormat::Json => render_json(block, results, show_range),
    }
}

/// レポートをファイル、または未指定なら標準出力に書き出す
pub fn write_report<P: AsRef<Path>>(path: Option<P>, content: &str) -> Result<(), AppError> {
    match path {
        Some(p) => {
            fs::write(p.as_ref(), content)?;
            tracing::info!("[output] Wrote report to {}", p.as_ref().display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
