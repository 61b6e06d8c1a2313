use crate::common::debug_log;
use crate::error::AppError;
use crate::ipv4_utils::{contains, range_of};
use crate::parse::{CidrBlock, parse_cidr};
use crate::parse_ipv4::parse_address;
use rayon::prelude::*;
use serde::Serialize;

/// ip_address が cidr_range の範囲に含まれるかを判定する。
/// どちらかの入力が不正な場合は、どちらが不正かを示すエラーを返す。
pub fn is_address_in_cidr(ip_address: &str, cidr_range: &str) -> Result<bool, AppError> {
    let candidate = parse_address(ip_address).map_err(|e| {
        debug_log(format!("Rejected IP address: {}", e));
        AppError::InvalidAddress(e)
    })?;
    let block = parse_cidr_range(cidr_range)?;

    let range = range_of(&block);
    Ok(contains(&range, candidate))
}

/// CIDR文字列を解析し、失敗時はCIDR側のエラーとして返す
pub fn parse_cidr_range(cidr_range: &str) -> Result<CidrBlock, AppError> {
    parse_cidr(cidr_range).map_err(|e| {
        debug_log(format!("Rejected CIDR range: {}", e));
        AppError::InvalidCidr(e)
    })
}

/// 1件分の判定結果。
/// 不正なアドレスはエラーメッセージを持ち、in_range は None になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub address: String,
    pub in_range: Option<bool>,
    pub error: Option<String>,
}

impl CheckResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// 解析済みのブロックに対して複数アドレスを並列に判定する。
/// 結果は入力順を保持し、不正なアドレスがあってもバッチ全体は中断しない。
pub fn check_addresses<S>(block: &CidrBlock, candidates: &[S]) -> Vec<CheckResult>
where
    S: AsRef<str> + Sync,
{
    debug_log(format!(
        "Checking {} address(es) against {}",
        candidates.len(),
        block
    ));
    let range = range_of(block);

    candidates
        .par_iter()
        .map(|c| {
            let text = c.as_ref();
            match parse_address(text) {
                Ok(addr) => CheckResult {
                    address: text.to_string(),
                    in_range: Some(contains(&range, addr)),
                    error: None,
                },
                Err(e) => {
                    debug_log(format!("Rejected IP address: {}", e));
                    CheckResult {
                        address: text.to_string(),
                        in_range: None,
                        error: Some(AppError::InvalidAddress(e).to_string()),
                    }
                }
            }
        })
        .collect()
}

/// テキストから判定対象のアドレスを1行1件で取り出す。
/// 前後の空白は取り除き、空行と '#' で始まるコメント行は読み飛ばす。
pub fn parse_address_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

