//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各个状态转移方法

use rand::RngExt;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::{Difficulty, GAME_IMAGES, Outcome};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::Tick => self.advance_image(),
            Action::Tap => self.tap(),

            Action::SelectDifficulty(d) => self.select_difficulty(d),
            Action::Restart => self.restart(),

            Action::Acknowledge => self.acknowledge(),
        }
        false
    }

    // ============ 回合进行中 ============

    /// 循环推进当前图片，停止状态下是空操作
    pub fn advance_image(&mut self) {
        if !self.is_running() {
            return;
        }
        self.current_index = (self.current_index + 1) % GAME_IMAGES.len();
    }

    /// 拍下当前图片，结束本轮并结算
    pub fn tap(&mut self) {
        if !self.is_running() {
            return;
        }
        self.mode = AppMode::Stopped;
        if self.current_index == self.target_index {
            self.score += 1;
            self.notice = Some(Outcome::Success);
        } else {
            self.notice = Some(Outcome::Failure);
        }
    }

    // ============ 停止状态下 ============

    /// 切换难度，只作用于下一轮的 tick 间隔
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.is_running() {
            return;
        }
        self.difficulty = difficulty;
    }

    /// 开始新一轮，目标图片均匀随机选取
    pub fn restart(&mut self) {
        if self.is_running() {
            return;
        }
        self.target_index = self.rng.random_range(0..GAME_IMAGES.len());
        self.mode = AppMode::Running;
    }

    /// 关闭结果弹窗
    pub fn acknowledge(&mut self) {
        self.notice = None;
    }
}
