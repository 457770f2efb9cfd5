// ==========================================
// 前一日上架盘点表生成器 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// 引擎层错误类型
///
/// 致命错误在任何抽样状态构建之前抛出，不产生部分结果。
#[derive(Error, Debug)]
pub enum GenerateError {
    /// 源文件缺少必要字段（致命）
    #[error("源文件缺少必要字段: {missing:?}")]
    SchemaError { missing: Vec<String> },

    /// 运行参数非法（致命）
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 数据导入失败（致命）
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Result 类型别名
pub type GenerateResult<T> = Result<T, GenerateError>;
