//! Action 枚举定义 (Intent)
//!
//! 按键事件与定时 tick 转化为明确的语义化 Action

use crate::models::Difficulty;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    // 回合进行中
    Tick, // 定时推进图片
    Tap,  // 拍下当前图片

    // 停止状态下
    SelectDifficulty(Difficulty),
    Restart,

    // 结果弹窗
    Acknowledge,
}
