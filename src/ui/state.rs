//! App 状态定义 (Model)
//!
//! 包含回合状态结构体及相关枚举

use rand::rngs::StdRng;

use crate::config::Config;
use crate::models::{Difficulty, GAME_IMAGES, Outcome};

/// 应用状态
pub struct App {
    pub score: u32,
    pub current_index: usize,
    pub target_index: usize,
    pub difficulty: Difficulty,
    pub mode: AppMode,
    pub notice: Option<Outcome>, // 回合结果弹窗，Some 时为模态
    pub rng: StdRng,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Running,
    Stopped,
}

impl App {
    /// 创建新的应用实例，开局即进入运行状态
    pub fn new(config: Config, rng: StdRng) -> Self {
        Self {
            score: 0,
            current_index: 0,
            target_index: 1,
            difficulty: config.difficulty,
            mode: AppMode::Running,
            notice: None,
            rng,
        }
    }

    /// 回合是否进行中
    pub fn is_running(&self) -> bool {
        self.mode == AppMode::Running
    }

    /// 当前展示的图片名
    pub fn current_image(&self) -> &'static str {
        GAME_IMAGES[self.current_index]
    }

    /// 目标图片名
    pub fn target_image(&self) -> &'static str {
        GAME_IMAGES[self.target_index]
    }
}
