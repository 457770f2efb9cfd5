// ==========================================
// 前一日上架盘点表生成器 - 引擎编排器
// ==========================================
// 用途: 协调四个阶段的执行顺序
// 流程: 清洗 -> 名册 -> 抽样 -> 盘点表
// ==========================================

use crate::config::GeneratorConfig;
use crate::domain::{CheckTable, ExclusionSet, ShortageRecord};
use crate::engine::check_table::CheckTableBuilder;
use crate::engine::error::GenerateResult;
use crate::engine::roster::RosterBuilder;
use crate::engine::sampler::InspectionSampler;
use crate::engine::source_cleaner::SourceCleaner;
use crate::importer::RawTable;
use tracing::{debug, info};

// ==========================================
// GenerateOutcome - 生成结果
// ==========================================

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// 盘点表（主输出）
    pub check_table: CheckTable,

    /// 抽样不足清单（诊断输出，按实际条数升序）
    pub shortages: Vec<ShortageRecord>,

    /// 清洗后的抽样池大小
    pub pool_size: usize,

    /// 盘点组数
    pub roster_size: usize,
}

// ==========================================
// CheckTableGenerator - 引擎编排器
// ==========================================

pub struct CheckTableGenerator {
    config: GeneratorConfig,
    cleaner: SourceCleaner,
    roster_builder: RosterBuilder,
    sampler: InspectionSampler,
    table_builder: CheckTableBuilder,
}

impl CheckTableGenerator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 运行参数（构造时校验，非法参数直接拒绝）
    pub fn new(config: GeneratorConfig) -> GenerateResult<Self> {
        config.validate()?;

        Ok(Self {
            cleaner: SourceCleaner::new(&config),
            roster_builder: RosterBuilder::new(&config),
            sampler: InspectionSampler::new(config.sample_size),
            table_builder: CheckTableBuilder::new(config.sample_size),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 执行完整生成流程
    ///
    /// 单线程同步执行，一次调用完成全部四个阶段；
    /// 要么产出完整结果，要么在构建任何抽样状态之前以致命错误终止。
    ///
    /// # 参数
    /// - source: 解析后的前一日上架结果表
    /// - exclusions: 储位排除集（未上传差异明细表时传空集）
    pub fn generate(
        &self,
        source: &RawTable,
        exclusions: &ExclusionSet,
    ) -> GenerateResult<GenerateOutcome> {
        info!(
            "开始生成盘点表: 源数据 {} 行, k={}, seed={}",
            source.row_count(),
            self.config.sample_size,
            self.config.seed
        );

        // 阶段 1: 源数据清洗
        let pool = self.cleaner.clean(source, exclusions)?;

        // 阶段 2: 盘点组名册
        let roster = self.roster_builder.build(&pool);
        debug!("名册: {:?}", roster);

        // 阶段 3: 随机抽样
        let outcome = self
            .sampler
            .sample(&pool, &roster, exclusions, self.config.seed);

        // 阶段 4: 盘点表生成
        let check_table = self.table_builder.build(&outcome.assignments);

        info!(
            "盘点表生成完成: {} 行, 缺口 {} 组",
            check_table.rows.len(),
            outcome.shortages.len()
        );

        Ok(GenerateOutcome {
            check_table,
            shortages: outcome.shortages,
            pool_size: pool.len(),
            roster_size: roster.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source_table(rows: Vec<(&str, &str, &str, &str, &str)>) -> RawTable {
        RawTable {
            headers: vec![
                "作业类型".to_string(),
                "储区号".to_string(),
                "上架量".to_string(),
                "储位编码".to_string(),
                "上架员".to_string(),
            ],
            rows: rows
                .into_iter()
                .map(|(op_type, zone, qty, loc, operator)| {
                    let mut row = HashMap::new();
                    row.insert("作业类型".to_string(), op_type.to_string());
                    row.insert("储区号".to_string(), zone.to_string());
                    row.insert("上架量".to_string(), qty.to_string());
                    row.insert("储位编码".to_string(), loc.to_string());
                    row.insert("上架员".to_string(), operator.to_string());
                    row
                })
                .collect(),
        }
    }

    fn config_k2() -> GeneratorConfig {
        GeneratorConfig {
            sample_size: 2,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_full_pipeline_deterministic() {
        let source = source_table(vec![
            ("采购进货", "A", "5", "A-01", "op_a"),
            ("采购进货", "A", "5", "A-02", "op_a"),
            ("采购进货", "B", "5", "B-01", "op_b"),
            ("采购进货", "B", "5", "B-02", "op_b"),
        ]);

        let generator = CheckTableGenerator::new(config_k2()).unwrap();

        let first = generator.generate(&source, &ExclusionSet::empty()).unwrap();
        let second = generator.generate(&source, &ExclusionSet::empty()).unwrap();

        assert_eq!(first.check_table, second.check_table);
        assert_eq!(first.shortages, second.shortages);
    }

    #[test]
    fn test_pipeline_wires_stages_together() {
        let source = source_table(vec![
            ("采购进货", "A", "5", "A-01", "op_a"),
            ("采购进货", "A", "5", "A-02", "op_a"),
            ("采购进货", "B", "5", "B-01", "op_b"),
            ("采购进货", "B", "5", "B-02", "op_b"),
            // 黑名单与退货储区不进入名册/池
            ("采购进货", "A", "5", "X-01", "xiao.han.1@jd.com"),
            ("采购进货", "R", "5", "R-01", "op_c"),
        ]);

        let generator = CheckTableGenerator::new(config_k2()).unwrap();
        let outcome = generator.generate(&source, &ExclusionSet::empty()).unwrap();

        // R 储区行被清洗，黑名单账号行保留在池中但不设组
        assert_eq!(outcome.pool_size, 5);
        assert_eq!(outcome.roster_size, 2);
        assert_eq!(outcome.check_table.rows.len(), 2);
        assert_eq!(outcome.check_table.rows[0].operator_id, "op_a");
        assert_eq!(outcome.check_table.rows[1].operator_id, "op_b");
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = GeneratorConfig {
            sample_size: 0,
            ..GeneratorConfig::default()
        };

        assert!(CheckTableGenerator::new(config).is_err());
    }
}
