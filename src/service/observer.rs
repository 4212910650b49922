use crate::error::FarmError;
use crate::remote::Resource;

/// 被中止的远程操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    Import,
    Export,
    History,
}

/// 失败上报 (日志/界面提示), 控制器不重试
pub trait FailureObserver: Send + Sync {
    fn on_failure(&self, resource: Resource, op: Operation, error: &FarmError);
}

/// 默认实现: 写入 tracing 日志
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn on_failure(&self, resource: Resource, op: Operation, error: &FarmError) {
        tracing::error!("[{}] {:?} failed: {}", resource.path(), op, error);
    }
}
