use std::io;
use thiserror::Error;

/// 入力文字列の検証エラー。
/// どの形式違反かを区別できるよう、閉じた3種類のバリアントに限定する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // オクテット数の不一致、数字以外の文字、0-255の範囲外、冗長な先頭ゼロ
    #[error("Invalid IPv4 address format: '{0}'")]
    InvalidAddressFormat(String),

    // プレフィックス長が空・数値でない・0-32の範囲外
    #[error("Invalid prefix length: '{0}'")]
    InvalidPrefixLength(String),

    // スラッシュが複数、またはアドレス部が空
    #[error("Invalid CIDR format: '{0}'")]
    InvalidCidrFormat(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // 判定対象のIPアドレスが不正
    #[error("Invalid IP address: {0}")]
    InvalidAddress(ValidationError),

    // CIDR範囲の指定が不正
    #[error("Invalid CIDR range: {0}")]
    InvalidCidr(ValidationError),

    // IOまわりのエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // JSON出力時のシリアライズエラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // rayonスレッドプールの構築失敗
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // 特定の入力が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// 入力検証エラーであれば、その中身を返す
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::InvalidAddress(e) | AppError::InvalidCidr(e) => Some(e),
            _ => None,
        }
    }
}
