//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::Difficulty;

/// 根据当前模式和按键获取对应的 Action
///
/// 结果弹窗展示期间为模态：除确认键外一律吞掉
pub fn get_action(mode: &AppMode, notice_shown: bool, key: KeyCode) -> Option<Action> {
    if notice_shown {
        return match key {
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::Acknowledge),
            _ => None,
        };
    }

    match mode {
        AppMode::Running => match key {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Tap),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        AppMode::Stopped => match key {
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Char('1') => Some(Action::SelectDifficulty(Difficulty::Easy)),
            KeyCode::Char('2') => Some(Action::SelectDifficulty(Difficulty::Medium)),
            KeyCode::Char('3') => Some(Action::SelectDifficulty(Difficulty::Hard)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, app.notice.is_some(), key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_key_only_while_running() {
        assert_eq!(
            get_action(&AppMode::Running, false, KeyCode::Char(' ')),
            Some(Action::Tap)
        );
        assert_eq!(get_action(&AppMode::Stopped, false, KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_restart_key_only_while_stopped() {
        assert_eq!(
            get_action(&AppMode::Stopped, false, KeyCode::Char('r')),
            Some(Action::Restart)
        );
        assert_eq!(get_action(&AppMode::Running, false, KeyCode::Char('r')), None);
    }

    #[test]
    fn test_difficulty_keys_only_while_stopped() {
        assert_eq!(
            get_action(&AppMode::Stopped, false, KeyCode::Char('3')),
            Some(Action::SelectDifficulty(Difficulty::Hard))
        );
        assert_eq!(get_action(&AppMode::Running, false, KeyCode::Char('2')), None);
    }

    #[test]
    fn test_notice_dialog_is_modal() {
        assert_eq!(get_action(&AppMode::Stopped, true, KeyCode::Char('r')), None);
        assert_eq!(get_action(&AppMode::Stopped, true, KeyCode::Char('q')), None);
        assert_eq!(
            get_action(&AppMode::Stopped, true, KeyCode::Enter),
            Some(Action::Acknowledge)
        );
        assert_eq!(
            get_action(&AppMode::Stopped, true, KeyCode::Char('o')),
            Some(Action::Acknowledge)
        );
    }

    #[test]
    fn test_quit_key_in_both_modes() {
        assert_eq!(
            get_action(&AppMode::Running, false, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            get_action(&AppMode::Stopped, false, KeyCode::Char('q')),
            Some(Action::Quit)
        );
    }
}
