//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::models::Outcome;
use components::{image_art, image_color, render_dialog_framework};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 顶栏
            Constraint::Min(10),   // 图片
            Constraint::Length(3), // 目标
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_image(frame, app, chunks[1]);
    render_target(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染结果弹窗
    if let Some(outcome) = app.notice {
        render_notice_dialog(frame, outcome);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("🎯 拍图反应").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(inner);

    // 难度选择只在停止时展示
    let left = if app.is_running() {
        Line::from(Span::styled("回合进行中…", Style::default().fg(Color::Green)))
    } else {
        Line::from(vec![
            Span::raw("难度: "),
            Span::styled(
                app.difficulty.title(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [1/2/3 切换]", Style::default().fg(Color::Gray)),
        ])
    };
    frame.render_widget(Paragraph::new(left), chunks[0]);

    let score = Paragraph::new(format!("得分: {}", app.score))
        .alignment(Alignment::Right)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(score, chunks[1]);
}

fn render_image(frame: &mut Frame, app: &App, area: Rect) {
    let name = app.current_image();
    let image = Paragraph::new(image_art(name))
        .style(Style::default().fg(image_color(name)))
        .alignment(Alignment::Center)
        .block(Block::default().title("图片").borders(Borders::ALL));
    frame.render_widget(image, area);
}

fn render_target(frame: &mut Frame, app: &App, area: Rect) {
    let target = Paragraph::new(Line::from(vec![
        Span::raw("目标: "),
        Span::styled(
            app.target_image(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(target, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.notice.is_some() {
        Line::from("[Enter/o] 确认")
    } else {
        match app.mode {
            // 运行中重新开始不可用，置灰展示
            AppMode::Running => Line::from(vec![
                Span::raw("[空格] 拍！  "),
                Span::styled("[r] 重新开始", Style::default().add_modifier(Modifier::DIM)),
                Span::raw("  [q] 退出"),
            ]),
            AppMode::Stopped => {
                Line::from("[r] 重新开始  [1] 简单  [2] 中等  [3] 困难  [q] 退出")
            }
        }
    };

    let help = Paragraph::new(line)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_notice_dialog(frame: &mut Frame, outcome: Outcome) {
    let area = centered_rect(50, 25, frame.area());
    let color = match outcome {
        Outcome::Success => Color::Green,
        Outcome::Failure => Color::Red,
    };
    let inner = render_dialog_framework(frame, area, outcome.title(), color);

    let body = Paragraph::new(format!("{}\n\n[Enter/o] 确认", outcome.message()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
