// ==========================================
// 前一日上架盘点表生成器 - 盘点表构建器
// ==========================================
// 职责: 把抽样分配折叠为盘点表行(含盘点内容列)
// 约定: 不重排 / 不去重,组内重复由不放回抽样排除
// ==========================================

use crate::domain::{CheckRow, CheckTable, SampleAssignment};

// ==========================================
// CheckTableBuilder - 盘点表构建器
// ==========================================
pub struct CheckTableBuilder {
    /// 每组抽样条数 k（槽位列数）
    sample_size: usize,
}

impl CheckTableBuilder {
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// 从抽样分配构建盘点表
    ///
    /// 每个分配产出一行: 前 n 个槽位按抽取顺序填充储位编码，
    /// 其余槽位为 None；盘点内容列为非空槽位以逗号连接。
    pub fn build(&self, assignments: &[SampleAssignment]) -> CheckTable {
        let rows = assignments
            .iter()
            .map(|assignment| self.build_row(assignment))
            .collect();

        CheckTable {
            sample_size: self.sample_size,
            rows,
        }
    }

    fn build_row(&self, assignment: &SampleAssignment) -> CheckRow {
        let mut slots: Vec<Option<String>> = assignment
            .locations
            .iter()
            .take(self.sample_size)
            .cloned()
            .map(Some)
            .collect();
        slots.resize(self.sample_size, None);

        let summary = assignment
            .locations
            .iter()
            .map(String::as_str)
            .filter(|loc| !loc.trim().is_empty())
            .collect::<Vec<_>>()
            .join(",");

        CheckRow {
            operator_id: assignment.operator_id.clone(),
            slots,
            summary,
        }
    }
}
