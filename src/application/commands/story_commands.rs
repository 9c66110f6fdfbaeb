//! Story Commands - 故事朗读命令定义

/// 切分故事命令
///
/// 优先走远端分析服务，失败时回退本地引擎
#[derive(Debug, Clone)]
pub struct SegmentStory {
    pub text: String,
    pub user_id: String,
}

/// 逐片段合成命令
///
/// 顺序合成每个片段，单片段失败不中止整批
#[derive(Debug, Clone)]
pub struct NarrateSegments {
    pub text: String,
    pub user_id: String,
}

/// 整篇合并合成命令
///
/// 发送完整原文做一次合成，失败即整体失败
#[derive(Debug, Clone)]
pub struct NarrateMerged {
    pub text: String,
    pub user_id: String,
}
