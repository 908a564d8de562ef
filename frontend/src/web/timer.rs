//! 定时器封装模块

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use shortdash::redirect::Sleeper;

/// 基于 `setTimeout` 的异步等待
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

#[async_trait::async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
