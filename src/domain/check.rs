// ==========================================
// 前一日上架盘点表生成器 - 盘点表实体
// ==========================================
// 职责: 抽样结果与盘点表输出的领域表示
// ==========================================

use serde::{Deserialize, Serialize};

/// 一个盘点组（上架员）的抽样分配
///
/// `locations` 按抽取顺序保存，组内不重复（不放回抽样保证）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAssignment {
    /// 上架员账号
    pub operator_id: String,

    /// 抽中的储位编码（按抽取顺序，0..k 条）
    pub locations: Vec<String>,
}

impl SampleAssignment {
    /// 实际抽样条数
    pub fn actual_count(&self) -> usize {
        self.locations.len()
    }
}

/// 抽样不足记录（实际条数 < k 时产生）
///
/// 仅作为诊断输出，不回流入抽样流程。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageRecord {
    /// 上架员账号
    pub operator_id: String,

    /// 实际抽样条数
    pub actual_count: usize,
}

/// 抽样阶段的完整输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOutcome {
    /// 每个名册条目一条分配，按名册顺序
    pub assignments: Vec<SampleAssignment>,

    /// 抽样不足清单（按实际条数升序）
    pub shortages: Vec<ShortageRecord>,
}

/// 盘点表的一行（一个盘点组）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRow {
    /// 上架员账号
    pub operator_id: String,

    /// k 个储位编码槽位（抽样不足时尾部为 None）
    pub slots: Vec<Option<String>>,

    /// 盘点内容列（非空槽位按顺序以逗号连接）
    pub summary: String,
}

/// 盘点表（最终输出）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTable {
    /// 每组抽样条数 k（槽位列数）
    pub sample_size: usize,

    /// 每个盘点组一行，按名册顺序
    pub rows: Vec<CheckRow>,
}

impl CheckTable {
    /// 输出表头: 上架员, 储位编码_1..k, 盘点内容列
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.sample_size + 2);
        headers.push("上架员".to_string());
        for i in 1..=self.sample_size {
            headers.push(format!("储位编码_{}", i));
        }
        headers.push("盘点内容列".to_string());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_table_headers() {
        let table = CheckTable {
            sample_size: 3,
            rows: vec![],
        };

        assert_eq!(
            table.headers(),
            vec!["上架员", "储位编码_1", "储位编码_2", "储位编码_3", "盘点内容列"]
        );
    }

    #[test]
    fn test_actual_count() {
        let assignment = SampleAssignment {
            operator_id: "li.si@jd.com".to_string(),
            locations: vec!["A-01".to_string(), "B-02".to_string()],
        };

        assert_eq!(assignment.actual_count(), 2);
    }
}
