/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Txt, // デフォルトは Txt
        }
    }
}

/// デバッグ用のログ出力。
/// 出力先とレベルはmainで初期化したtracing-subscriberに従う。
pub fn debug_log<S: AsRef<str>>(message: S) {
    tracing::debug!("{}", message.as_ref());
}
