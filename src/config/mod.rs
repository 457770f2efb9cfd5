// ==========================================
// 前一日上架盘点表生成器 - 配置层
// ==========================================
// 职责: 运行参数的定义、加载与校验
// 存储: JSON 文件（可选，缺省使用内置默认值）
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 每组抽样条数的允许范围
pub const SAMPLE_SIZE_MIN: usize = 1;
pub const SAMPLE_SIZE_MAX: usize = 50;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("抽样条数超出范围 [{min}, {max}]: {value}", min = SAMPLE_SIZE_MIN, max = SAMPLE_SIZE_MAX)]
    SampleSizeOutOfRange { value: usize },

    #[error("上架量阈值必须为正的有限数值: {value}")]
    QtyLimitInvalid { value: f64 },

    #[error("配置文件读取失败: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// 盘点表生成器运行参数
///
/// 默认值与既有作业口径一致: k=10, seed=42, 上架量阈值 50。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 每个上架员抽样条数 k（1..=50）
    pub sample_size: usize,

    /// 随机种子（相同种子 + 相同输入 => 输出完全一致）
    pub seed: u64,

    /// 上架量阈值（仅保留 上架量 <= qty_limit 的记录）
    pub qty_limit: f64,

    /// 作业类型哨兵值（仅此类型进入抽样池）
    pub operation_type: String,

    /// 退货储区号（该储区的记录被剔除）
    pub rejected_zone: String,

    /// 上架员黑名单（精确匹配，系统账号不参与盘点）
    pub excluded_operator: String,

    /// 上架员黑名单前缀（前缀匹配，自动化账号不参与盘点）
    pub excluded_operator_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_size: 10,
            seed: 42,
            qty_limit: 50.0,
            operation_type: "采购进货".to_string(),
            rejected_zone: "R".to_string(),
            excluded_operator: "xiao.han.1@jd.com".to_string(),
            excluded_operator_prefix: "jdhk_".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// 从 JSON 文件加载配置（缺失字段回落到默认值）
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验参数合法性
    ///
    /// # 校验规则
    /// - sample_size: 1..=50
    /// - qty_limit: 正的有限数值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size < SAMPLE_SIZE_MIN || self.sample_size > SAMPLE_SIZE_MAX {
            return Err(ConfigError::SampleSizeOutOfRange {
                value: self.sample_size,
            });
        }

        if !self.qty_limit.is_finite() || self.qty_limit <= 0.0 {
            return Err(ConfigError::QtyLimitInvalid {
                value: self.qty_limit,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.seed, 42);
        assert_eq!(config.operation_type, "采购进货");
        assert_eq!(config.rejected_zone, "R");
    }

    #[test]
    fn test_sample_size_bounds() {
        let mut config = GeneratorConfig::default();

        config.sample_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SampleSizeOutOfRange { value: 0 })
        ));

        config.sample_size = 51;
        assert!(config.validate().is_err());

        config.sample_size = 50;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_qty_limit_must_be_positive_finite() {
        let mut config = GeneratorConfig::default();

        config.qty_limit = 0.0;
        assert!(config.validate().is_err());

        config.qty_limit = f64::NAN;
        assert!(config.validate().is_err());

        config.qty_limit = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_file_partial_fields() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"sample_size": 5, "seed": 7}}"#).unwrap();

        let config = GeneratorConfig::from_json_file(temp_file.path()).unwrap();

        assert_eq!(config.sample_size, 5);
        assert_eq!(config.seed, 7);
        // 未指定字段回落到默认值
        assert_eq!(config.qty_limit, 50.0);
        assert_eq!(config.excluded_operator_prefix, "jdhk_");
    }

    #[test]
    fn test_from_json_file_rejects_invalid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"sample_size": 99}}"#).unwrap();

        assert!(GeneratorConfig::from_json_file(temp_file.path()).is_err());
    }
}
