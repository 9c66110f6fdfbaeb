//! 角色音色登记表
//!
//! 单次处理内稳定的 角色名 → 音色 分配。
//! 每次处理一个新文档时重新创建，处理结束后整体丢弃。

use std::collections::HashMap;

use super::value_objects::VoiceId;

/// 旁白角色的固定显示名
pub const NARRATOR: &str = "Narrator";

/// 固定音色池
///
/// 不变量：index 0 专属于旁白，不会分配给角色
#[derive(Debug, Clone)]
pub struct VoicePool {
    voices: Vec<VoiceId>,
}

impl VoicePool {
    /// 创建音色池
    ///
    /// 至少需要 2 个音色：1 个旁白 + 1 个角色
    pub fn new(voices: Vec<VoiceId>) -> Result<Self, &'static str> {
        if voices.len() < 2 {
            return Err("音色池至少需要 2 个音色");
        }
        Ok(Self { voices })
    }

    /// 旁白音色（index 0）
    pub fn narrator_voice(&self) -> &VoiceId {
        &self.voices[0]
    }

    pub fn get(&self, index: usize) -> &VoiceId {
        &self.voices[index]
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn voices(&self) -> &[VoiceId] {
        &self.voices
    }
}

impl Default for VoicePool {
    fn default() -> Self {
        Self {
            voices: vec![
                VoiceId::from("david"),
                VoiceId::from("sarah"),
                VoiceId::from("alex"),
                VoiceId::from("emma"),
                VoiceId::from("michael"),
            ],
        }
    }
}

/// 角色音色登记表
///
/// 不变量：
/// - 同一次处理内，相同角色名总是解析到相同音色
/// - 旁白固定解析到池内 index 0，不作为动态条目存储
/// - 角色从 index 1 开始轮转分配；池耗尽后在 1..len 内回绕
///   （index 0 永不回绕给角色），音色复用是预期行为而非错误
#[derive(Debug)]
pub struct VoiceRegistry {
    pool: VoicePool,
    assigned: HashMap<String, VoiceId>,
    /// 下一个待分配的池下标，始终在 1..len 区间
    cursor: usize,
    /// 已铸造的匿名角色标签数
    generic_count: usize,
}

impl VoiceRegistry {
    pub fn new(pool: VoicePool) -> Self {
        Self {
            pool,
            assigned: HashMap::new(),
            cursor: 1,
            generic_count: 0,
        }
    }

    /// 旁白音色
    pub fn narrator_voice(&self) -> VoiceId {
        self.pool.narrator_voice().clone()
    }

    /// 解析具名角色的音色
    ///
    /// 首次出现时分配下一个轮转音色并记住，之后复用
    pub fn voice_for(&mut self, name: &str) -> VoiceId {
        if let Some(voice) = self.assigned.get(name) {
            return voice.clone();
        }
        let voice = self.next_voice();
        self.assigned.insert(name.to_string(), voice.clone());
        voice
    }

    /// 铸造一个新的匿名角色
    ///
    /// 每一条未具名的引号对白都视为新的匿名说话人，
    /// 不跨行合并（来源系统的行为，保留为设计决定）
    pub fn mint_generic(&mut self) -> (String, VoiceId) {
        self.generic_count += 1;
        let label = format!("Character {}", self.generic_count);
        let voice = self.next_voice();
        self.assigned.insert(label.clone(), voice.clone());
        (label, voice)
    }

    /// 取下一个轮转音色并前进游标
    ///
    /// 游标回绕到 1 而不是 0，index 0 保留给旁白
    fn next_voice(&mut self) -> VoiceId {
        let voice = self.pool.get(self.cursor).clone();
        self.cursor += 1;
        if self.cursor >= self.pool.len() {
            self.cursor = 1;
        }
        voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(ids: &[&str]) -> VoicePool {
        VoicePool::new(ids.iter().map(|id| VoiceId::from(*id)).collect()).unwrap()
    }

    #[test]
    fn test_pool_requires_two_voices() {
        assert!(VoicePool::new(vec![VoiceId::from("solo")]).is_err());
        assert!(VoicePool::new(vec![]).is_err());
    }

    #[test]
    fn test_default_pool_narrator_is_david() {
        let pool = VoicePool::default();
        assert_eq!(pool.narrator_voice().as_str(), "david");
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_same_name_same_voice() {
        let mut registry = VoiceRegistry::new(VoicePool::default());
        let first = registry.voice_for("Tom");
        let second = registry.voice_for("Tom");
        assert_eq!(first, second);
    }

    #[test]
    fn test_assignment_starts_at_index_one() {
        let mut registry = VoiceRegistry::new(VoicePool::default());
        assert_eq!(registry.voice_for("Tom").as_str(), "sarah");
        assert_eq!(registry.voice_for("Emma").as_str(), "alex");
    }

    #[test]
    fn test_wraparound_skips_narrator_slot() {
        let mut registry = VoiceRegistry::new(pool_of(&["narr", "a", "b"]));
        assert_eq!(registry.voice_for("One").as_str(), "a");
        assert_eq!(registry.voice_for("Two").as_str(), "b");
        // 池耗尽：回绕到 index 1，绝不回到 index 0
        assert_eq!(registry.voice_for("Three").as_str(), "a");
        assert_eq!(registry.voice_for("Four").as_str(), "b");
    }

    #[test]
    fn test_generic_labels_are_never_coalesced() {
        let mut registry = VoiceRegistry::new(VoicePool::default());
        let (label1, voice1) = registry.mint_generic();
        let (label2, voice2) = registry.mint_generic();
        assert_eq!(label1, "Character 1");
        assert_eq!(label2, "Character 2");
        assert_ne!(voice1, voice2);
    }

    #[test]
    fn test_generic_and_named_share_rotation() {
        let mut registry = VoiceRegistry::new(VoicePool::default());
        assert_eq!(registry.voice_for("Tom").as_str(), "sarah");
        let (_, voice) = registry.mint_generic();
        assert_eq!(voice.as_str(), "alex");
        assert_eq!(registry.voice_for("Emma").as_str(), "emma");
    }

    #[test]
    fn test_narrator_voice_is_stable() {
        let registry = VoiceRegistry::new(VoicePool::default());
        assert_eq!(registry.narrator_voice().as_str(), "david");
    }
}
