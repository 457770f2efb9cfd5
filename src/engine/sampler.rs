// ==========================================
// 前一日上架盘点表生成器 - 抽样引擎
// ==========================================
// 职责: 为每个盘点组抽取互斥的储位样本
// 不变式: 本人作业不抽 / 组内不重复 / 跨组不放回 /
//         相同种子 + 相同输入 => 输出逐位一致
// ==========================================

use crate::domain::{ExclusionSet, PutawayTask, SampleAssignment, SampleOutcome, ShortageRecord};
use rand::seq::index;
use std::collections::HashSet;
use tracing::{debug, info};

// ==========================================
// DeterministicRng - 可复现随机源
// ==========================================

/// 整个运行期共享的确定性随机源（splitmix64）
///
/// 不依赖平台或 rand 内置算法的版本稳定性，保证相同种子在
/// 任何环境下产生相同序列。每次运行恰好创建一个实例，按名册
/// 顺序串行消费：后续组的抽取序列依赖于先前组消费了哪些记录。
#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

// ==========================================
// InspectionSampler - 抽样引擎
// ==========================================
pub struct InspectionSampler {
    /// 每组抽样条数 k
    sample_size: usize,
}

impl InspectionSampler {
    /// 构造抽样引擎
    ///
    /// # 参数
    /// - sample_size: 每组抽样条数 k（已由配置层校验范围）
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// 对名册中每个盘点组执行抽样
    ///
    /// # 算法（按名册升序逐组执行）
    /// 1. 当前工作池中剔除本组自身作业与被排除储位，得到可抽子集
    /// 2. n = min(k, |可抽子集|)；n = 0 时记录缺口 0 并跳过
    /// 3. 从可抽子集中等概率不放回抽取 n 条
    /// 4. 按抽取顺序记录储位编码；n < k 时记录缺口
    /// 5. 抽中记录从工作池永久移除（跨组不放回）
    ///
    /// 抽样永不报错：可抽子集为空退化为缺口记录。
    ///
    /// # 参数
    /// - pool: 清洗后的抽样池（顺序参与确定性，不得预先打乱）
    /// - roster: 盘点组名册（升序）
    /// - exclusions: 储位排除集（工作池收缩后判定依然生效）
    /// - seed: 随机种子
    pub fn sample(
        &self,
        pool: &[PutawayTask],
        roster: &[String],
        exclusions: &ExclusionSet,
        seed: u64,
    ) -> SampleOutcome {
        let mut rng = DeterministicRng::new(seed);
        let mut working: Vec<PutawayTask> = pool.to_vec();

        let mut assignments = Vec::with_capacity(roster.len());
        let mut shortages = Vec::new();

        for operator in roster {
            // 可抽子集: 非本人作业 且 储位未被排除
            let eligible: Vec<usize> = working
                .iter()
                .enumerate()
                .filter(|(_, task)| task.operator_id.as_deref() != Some(operator.as_str()))
                .filter(|(_, task)| !exclusions.contains(&task.location_code))
                .map(|(idx, _)| idx)
                .collect();

            if eligible.is_empty() {
                debug!("盘点组 {} 无可抽记录", operator);
                shortages.push(ShortageRecord {
                    operator_id: operator.clone(),
                    actual_count: 0,
                });
                assignments.push(SampleAssignment {
                    operator_id: operator.clone(),
                    locations: Vec::new(),
                });
                continue;
            }

            let n = self.sample_size.min(eligible.len());

            // 等概率不放回抽取 n 个下标
            let picks = index::sample(&mut rng, eligible.len(), n);

            let mut drawn_ids: HashSet<usize> = HashSet::with_capacity(n);
            let mut locations = Vec::with_capacity(n);
            for p in picks.iter() {
                let task = &working[eligible[p]];
                drawn_ids.insert(task.row_id);
                locations.push(task.location_code.clone());
            }

            if n < self.sample_size {
                debug!("盘点组 {} 抽样不足: {}/{}", operator, n, self.sample_size);
                shortages.push(ShortageRecord {
                    operator_id: operator.clone(),
                    actual_count: n,
                });
            }

            assignments.push(SampleAssignment {
                operator_id: operator.clone(),
                locations,
            });

            // 抽中记录从工作池永久移除，后续任何组不再可抽
            working.retain(|task| !drawn_ids.contains(&task.row_id));
        }

        // 与既有口径一致: 缺口清单按实际条数升序（稳定排序保持名册顺序）
        shortages.sort_by_key(|s| s.actual_count);

        info!(
            "抽样完成: {} 组, 消耗记录 {} 条, 缺口 {} 组",
            roster.len(),
            pool.len() - working.len(),
            shortages.len()
        );

        SampleOutcome {
            assignments,
            shortages,
        }
    }
}
