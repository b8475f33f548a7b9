//! User-facing copy shown by the life number form

pub const MISSING_BIRTHDAY_OR_GENDER: &str = "请填写出生日期和性别";
pub const CALCULATE_FAILED: &str = "计算失败，请重试";

pub const EMPTY_REDEEM_CODE: &str = "请输入兑换码";
pub const CHECK_FAILED: &str = "验证失败，请重试";
pub const REDEEM_CODE_VALID: &str = "✓ 兑换码有效";

pub const REDEEM_CODE_NOT_CHECKED: &str = "请先验证兑换码";
pub const GENERATE_FAILED: &str = "生成失败，请重试";

pub const NO_HISTORY_RECORDS: &str = "暂无记录";
