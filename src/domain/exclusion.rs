// ==========================================
// 前一日上架盘点表生成器 - 差异储位排除集
// ==========================================
// 职责: 差异明细表衍生的储位排除集合
// 约定: 恒存在,可为空;为空时所有判定为恒假
// ==========================================

use std::collections::HashSet;

/// 储位排除集
///
/// 来源于可选的差异明细表。未上传差异明细表时为空集，
/// 引用它的判定自然退化为 no-op，清洗与抽样只走一条代码路径。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    codes: HashSet<String>,
}

impl ExclusionSet {
    /// 空排除集（未上传差异明细表的运行模式）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从储位编码集合构建排除集
    ///
    /// TRIM 后为空的值被丢弃，重复值自动去重。
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let codes = codes
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        Self { codes }
    }

    /// 判断储位编码是否被排除（空集恒为 false）
    pub fn contains(&self, location_code: &str) -> bool {
        self.codes.contains(location_code.trim())
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}
