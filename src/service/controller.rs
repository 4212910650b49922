use super::list_view::ListView;
use super::observer::{FailureObserver, Operation, TracingObserver};
use super::store::EntityStore;
use crate::error::{FarmError, Result, ValidationError};
use crate::models::Record;
use crate::remote::{RemoteCollection, Resource};
use std::sync::Arc;

/// 界面状态机; 编辑与删除确认互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Idle,
    /// None 表示新建
    Editing(Option<i64>),
    ConfirmingDelete(i64),
    /// 库存出库 (仅库存页使用)
    Exporting(i64),
}

/// 通用资源控制器: 本地集合只在远程操作成功后才修改
pub struct ResourceController<T, R> {
    resource: Resource,
    remote: R,
    store: EntityStore<T>,
    view: ListView,
    mode: ViewMode,
    observer: Arc<dyn FailureObserver>,
}

impl<T, R> ResourceController<T, R>
where
    T: Record,
    R: RemoteCollection<T>,
{
    pub fn new(resource: Resource, remote: R, items_per_page: usize) -> Self {
        Self {
            resource,
            remote,
            store: EntityStore::new(),
            view: ListView::new(items_per_page),
            mode: ViewMode::Idle,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FailureObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn store(&self) -> &EntityStore<T> {
        &self.store
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.view.filtered(self.store.items())
    }

    pub fn current_page_items(&self) -> Vec<&T> {
        self.view.page(self.store.items())
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages(self.store.items())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    pub fn change_page(&mut self, page: usize) -> bool {
        self.view.change_page(self.store.items(), page)
    }

    /// 全量加载; 失败时保留旧数据
    pub async fn load(&mut self) -> Result<usize> {
        match self.remote.list().await {
            Ok(items) => {
                let count = items.len();
                self.store.replace_all(items);
                self.view.clamp_page(self.store.items());
                Ok(count)
            }
            Err(e) => {
                self.report(Operation::Load, &e);
                Err(e)
            }
        }
    }

    pub fn open_create(&mut self) {
        self.mode = ViewMode::Editing(None);
    }

    /// 打开编辑; 本地不存在该 id 时不切换状态
    pub fn open_edit(&mut self, id: i64) -> Option<&T> {
        if self.store.get(id).is_some() {
            self.mode = ViewMode::Editing(Some(id));
        }
        self.store.get(id)
    }

    pub fn close_editor(&mut self) {
        if matches!(self.mode, ViewMode::Editing(_)) {
            self.mode = ViewMode::Idle;
        }
    }

    /// 保存表单: 编辑中则 update, 否则 create; 失败时编辑状态保持, 便于重试
    pub async fn save(&mut self, values: T) -> Result<T> {
        let ViewMode::Editing(editing_id) = self.mode else {
            return Err(ValidationError::InvalidMode("save").into());
        };

        let (op, result) = match editing_id {
            Some(id) => (Operation::Update, self.remote.update(id, &values).await),
            None => (Operation::Create, self.remote.create(&values).await),
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                self.report(op, &e);
                return Err(e);
            }
        };

        // 新建记录必须带回服务端分配的 id
        if saved.id().is_none() {
            tracing::warn!("[{}] {:?} returned a record without id", self.resource.path(), op);
            return Err(ValidationError::MissingId.into());
        }

        match editing_id {
            Some(id) => {
                if !self.store.update_by_id(id, saved.clone()) {
                    tracing::debug!("[{}] updated id {} not present locally", self.resource.path(), id);
                }
            }
            None => self.store.insert(saved.clone()),
        }
        self.mode = ViewMode::Idle;
        Ok(saved)
    }

    /// 暂存待删除 id, 等待确认
    pub fn request_delete(&mut self, id: i64) {
        self.mode = ViewMode::ConfirmingDelete(id);
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.mode, ViewMode::ConfirmingDelete(_)) {
            self.mode = ViewMode::Idle;
        }
    }

    /// 执行删除; 成功后移除本地记录并修正页码, 无论成败都清除暂存 id
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let ViewMode::ConfirmingDelete(id) = self.mode else {
            return Err(ValidationError::InvalidMode("confirm_delete").into());
        };

        let result = self.remote.delete(id).await;
        self.mode = ViewMode::Idle;

        match result {
            Ok(()) => {
                self.store.remove_by_id(id);
                self.view.clamp_page(self.store.items());
                Ok(())
            }
            Err(e) => {
                self.report(Operation::Delete, &e);
                Err(e)
            }
        }
    }

    pub(crate) fn store_mut(&mut self) -> &mut EntityStore<T> {
        &mut self.store
    }

    pub(crate) fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub(crate) fn report(&self, op: Operation, error: &FarmError) {
        self.observer.on_failure(self.resource, op, error);
    }
}
