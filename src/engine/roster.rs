// ==========================================
// 前一日上架盘点表生成器 - 盘点组名册构建器
// ==========================================
// 职责: 从抽样池派生不重复的盘点组(上架员)名册
// 红线: 系统/自动化账号不得作为盘点对象
// ==========================================

use crate::config::GeneratorConfig;
use crate::domain::PutawayTask;
use std::collections::BTreeSet;
use tracing::info;

// ==========================================
// RosterBuilder - 名册构建器
// ==========================================
pub struct RosterBuilder {
    /// 黑名单账号（精确匹配）
    excluded_operator: String,

    /// 黑名单账号前缀
    excluded_operator_prefix: String,
}

impl RosterBuilder {
    /// 从运行参数构造名册构建器
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            excluded_operator: config.excluded_operator.clone(),
            excluded_operator_prefix: config.excluded_operator_prefix.clone(),
        }
    }

    /// 构建盘点组名册
    ///
    /// # 算法
    /// 1. 取抽样池中出现的不重复上架员账号（缺失账号的记录不参与）
    /// 2. 剔除精确匹配黑名单账号
    /// 3. 剔除黑名单前缀账号
    /// 4. 按字典序升序排列
    ///
    /// # 返回
    /// 升序名册；构建后不再变更
    pub fn build(&self, pool: &[PutawayTask]) -> Vec<String> {
        let distinct: BTreeSet<&str> = pool
            .iter()
            .filter_map(|task| task.operator_id.as_deref())
            .collect();

        let roster: Vec<String> = distinct
            .into_iter()
            .filter(|id| *id != self.excluded_operator)
            .filter(|id| {
                self.excluded_operator_prefix.is_empty()
                    || !id.starts_with(&self.excluded_operator_prefix)
            })
            .map(|id| id.to_string())
            .collect();

        info!("盘点组名册构建完成: {} 组", roster.len());
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(row_id: usize, operator: Option<&str>) -> PutawayTask {
        PutawayTask {
            row_id,
            operator_id: operator.map(|s| s.to_string()),
            location_code: format!("A-{:02}", row_id),
            quantity: 1.0,
        }
    }

    fn builder() -> RosterBuilder {
        RosterBuilder::new(&GeneratorConfig::default())
    }

    #[test]
    fn test_distinct_sorted_ascending() {
        let pool = vec![
            task(1, Some("wang.wu@jd.com")),
            task(2, Some("li.si@jd.com")),
            task(3, Some("wang.wu@jd.com")),
            task(4, Some("zhang.san@jd.com")),
        ];

        let roster = builder().build(&pool);

        assert_eq!(
            roster,
            vec!["li.si@jd.com", "wang.wu@jd.com", "zhang.san@jd.com"]
        );
    }

    #[test]
    fn test_missing_operator_excluded() {
        let pool = vec![task(1, None), task(2, Some("li.si@jd.com"))];

        let roster = builder().build(&pool);

        assert_eq!(roster, vec!["li.si@jd.com"]);
    }

    #[test]
    fn test_blacklist_exact_match() {
        let pool = vec![
            task(1, Some("xiao.han.1@jd.com")),
            task(2, Some("li.si@jd.com")),
        ];

        let roster = builder().build(&pool);

        assert_eq!(roster, vec!["li.si@jd.com"]);
    }

    #[test]
    fn test_blacklist_prefix_match() {
        let pool = vec![
            task(1, Some("jdhk_anything")),
            task(2, Some("jdhk_bot_7")),
            task(3, Some("li.si@jd.com")),
        ];

        let roster = builder().build(&pool);

        assert_eq!(roster, vec!["li.si@jd.com"]);
    }

    #[test]
    fn test_empty_prefix_excludes_nothing() {
        let config = GeneratorConfig {
            excluded_operator_prefix: String::new(),
            ..GeneratorConfig::default()
        };
        let pool = vec![task(1, Some("li.si@jd.com"))];

        let roster = RosterBuilder::new(&config).build(&pool);

        assert_eq!(roster, vec!["li.si@jd.com"]);
    }
}
