/// 定数の共通化

/// IPv4アドレスのビット長
pub const IPV4_BITS: u8 = 32;

/// ドット区切りのオクテット数
pub const OCTET_COUNT: usize = 4;

/// 1オクテットの最大桁数 (255)
pub const MAX_OCTET_DIGITS: usize = 3;

/// プレフィックス長の最大桁数 (32)
pub const MAX_PREFIX_DIGITS: usize = 2;

/// スラッシュ省略時のプレフィックス長 (a.b.c.d は a.b.c.d/32 とみなす)
pub const DEFAULT_PREFIX_LEN: u8 = 32;

pub const ADDRESS_DELIMITER: char = '.';

pub const PREFIX_DELIMITER: char = '/';

/// テキスト出力の各行の接頭辞
pub const RESULT_LINE_PREFIX: &str = "Is IP Address in a CIDR Range:";
