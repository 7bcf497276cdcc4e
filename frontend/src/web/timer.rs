//! 定时器封装模块
//!
//! 基于 `gloo-timers` 的一次性定时器，为模拟认证提供浏览器端的 [`Delay`] 实现。

use async_trait::async_trait;
use clubspot::Delay;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// 浏览器定时器
///
/// 封装 `setTimeout`。等待中的 future 被 drop 时，定时器随之清除。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        // setTimeout 只接受 32 位毫秒数
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
