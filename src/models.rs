use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 固定图片集，运行期间按此顺序循环展示
pub const GAME_IMAGES: [&str; 3] = ["apple", "egg", "dog"];

/// 游戏难度，决定一轮中图片切换的间隔
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 对应的 tick 间隔
    pub fn interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(1000),
            Difficulty::Medium => Duration::from_millis(750),
            Difficulty::Hard => Duration::from_millis(500),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }
}

/// 回合结果，拍击后以弹窗形式展示一次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn title(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Success => "拍中了目标图片，得 1 分",
            Outcome::Failure => "拍错了图片，下一轮再试",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_mapping() {
        assert_eq!(Difficulty::Easy.interval(), Duration::from_millis(1000));
        assert_eq!(Difficulty::Medium.interval(), Duration::from_millis(750));
        assert_eq!(Difficulty::Hard.interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_default_difficulty_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_image_set_is_fixed() {
        assert_eq!(GAME_IMAGES.len(), 3);
        assert_eq!(GAME_IMAGES[1], "egg");
    }
}
