//! 应用主循环
//!
//! ```text
//! loop {
//!     draw(project(controller))          每帧重新投影控制器状态
//!     quit?  -> break
//!     poll(100ms)
//!       按键 -> AppMessage -> update
//!       超时 -> 过期的状态消息 -> ClearStatus
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const STATUS_TTL: Duration = Duration::from_secs(4);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| view::render(app, frame))?;

        let msg = match event::poll_event(POLL_INTERVAL)? {
            Some(event) => event::handle_event(event, app),
            None if app.status_expired(STATUS_TTL) => AppMessage::ClearStatus,
            None => continue,
        };
        update::update(app, msg);
    }
    Ok(())
}
