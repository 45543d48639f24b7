mod config;
mod models;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::{StdRng, SysRng};
use ratatui::prelude::*;

use crate::config::load_config;
use crate::ui::{Action, App, render};

/// 获取配置文件路径 (~/.config/tapmatch/config.toml)
fn get_config_path() -> io::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("tapmatch");

    Ok(config_dir.join("config.toml"))
}

fn main() -> io::Result<()> {
    // 启动配置（只读，文件不存在时使用默认值）
    let config = load_config(&get_config_path()?)?;

    // 创建应用状态，开局即进入运行状态
    let mut app = App::new(config, StdRng::try_from_rng(&mut SysRng).expect("无法从系统熵源初始化随机数生成器"));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("最终得分: {}", app.score);

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    // tick 与按键在同一线程上串行处理：拍击停止回合后，
    // 已经到期的超时不会再推进图片
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = if app.is_running() {
            app.difficulty.interval().saturating_sub(last_tick.elapsed())
        } else {
            Duration::from_millis(200)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let was_running = app.is_running();
                    if ui::handle_key_event(app, key.code)? {
                        break;
                    }
                    // 重新开始时重置 tick 计时
                    if !was_running && app.is_running() {
                        last_tick = Instant::now();
                    }
                }
            }
        }

        if app.is_running() && last_tick.elapsed() >= app.difficulty.interval() {
            app.dispatch(Action::Tick);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
