use super::controller::{ResourceController, ViewMode};
use super::observer::{FailureObserver, Operation};
use super::store::EntityStore;
use crate::error::{FarmError, Result, ValidationError};
use crate::models::{ImportHistoryEntry, InventoryRecord};
use crate::remote::{InventoryRemote, RemoteCollection, Resource};
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::sync::Arc;

/// 有效期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryStatus {
    Normal,
    NearExpiry,
    Expired,
}

/// 有效期分类 (仅比较日期): 早于今天为过期, 一个自然月内为临期
pub fn classify_expiry(expiry_date: Option<NaiveDate>, today: NaiveDate) -> ExpiryStatus {
    let Some(expiry) = expiry_date else {
        return ExpiryStatus::Normal;
    };
    if expiry < today {
        return ExpiryStatus::Expired;
    }
    // 月末溢出时 chrono 取目标月最后一天 (1月31日 -> 2月末),
    // 不做按天进位 (1月31日 -> 3月2日); 临期窗口因此不会跨进第三个月
    let horizon = today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    if expiry <= horizon {
        ExpiryStatus::NearExpiry
    } else {
        ExpiryStatus::Normal
    }
}

/// 库存占比 (%), 限定在 [0, 100]; 上限缺失或为 0 时返回 0
pub fn stock_ratio(quantity: &BigDecimal, max_quantity: Option<&BigDecimal>) -> f64 {
    let Some(max) = max_quantity.filter(|m| !m.is_zero()) else {
        return 0.0;
    };
    let ratio = (quantity / max * BigDecimal::from(100)).to_f64().unwrap_or(0.0);
    ratio.clamp(0.0, 100.0)
}

/// 低库存: quantity <= minQuantity (缺省 0)
pub fn is_low_stock(inventory: &InventoryRecord) -> bool {
    let min = inventory.min_quantity.clone().unwrap_or_else(BigDecimal::zero);
    inventory.quantity <= min
}

/// 库存总值: Σ quantity × unitPrice (单价缺省为 0)
pub fn total_inventory_value<'a>(items: impl IntoIterator<Item = &'a InventoryRecord>) -> BigDecimal {
    items.into_iter().fold(BigDecimal::zero(), |acc, inv| match &inv.unit_price {
        Some(price) => acc + &inv.quantity * price,
        None => acc,
    })
}

/// 入库总成本: Σ totalPrice (缺省为 0)
pub fn total_import_cost<'a>(history: impl IntoIterator<Item = &'a ImportHistoryEntry>) -> BigDecimal {
    history.into_iter().fold(BigDecimal::zero(), |acc, h| match &h.total_price {
        Some(total) => acc + total,
        None => acc,
    })
}

/// 入库数量必须为正
pub fn validate_import(delta: &BigDecimal) -> std::result::Result<(), ValidationError> {
    if *delta <= BigDecimal::zero() {
        return Err(ValidationError::NonPositiveQuantity(delta.clone()));
    }
    Ok(())
}

/// 出库数量必须为正且不超过当前库存
pub fn validate_export(
    inventory: &InventoryRecord,
    amount: &BigDecimal,
) -> std::result::Result<(), ValidationError> {
    if *amount <= BigDecimal::zero() {
        return Err(ValidationError::NonPositiveQuantity(amount.clone()));
    }
    if *amount > inventory.quantity {
        return Err(ValidationError::QuantityExceeded {
            requested: amount.clone(),
            available: inventory.quantity.clone(),
        });
    }
    Ok(())
}

/// 库存概览 (卡片统计)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryOverview {
    pub total_items: usize,
    pub low_stock: usize,
    pub near_expiry: usize,
    pub expired: usize,
    pub total_value: BigDecimal,
}

impl InventoryOverview {
    pub fn compute(items: &[InventoryRecord], today: NaiveDate) -> Self {
        let mut overview = Self {
            total_items: items.len(),
            low_stock: 0,
            near_expiry: 0,
            expired: 0,
            total_value: total_inventory_value(items),
        };
        for inv in items {
            if is_low_stock(inv) {
                overview.low_stock += 1;
            }
            match classify_expiry(inv.expiry_date, today) {
                ExpiryStatus::NearExpiry => overview.near_expiry += 1,
                ExpiryStatus::Expired => overview.expired += 1,
                ExpiryStatus::Normal => {}
            }
        }
        overview
    }
}

/// 本地库存账本: 在内存中执行入库/出库事务, 不做 I/O
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    store: EntityStore<InventoryRecord>,
    history: Vec<ImportHistoryEntry>,
}

impl InventoryLedger {
    pub fn new(items: Vec<InventoryRecord>) -> Self {
        let mut store = EntityStore::new();
        store.replace_all(items);
        Self {
            store,
            history: Vec::new(),
        }
    }

    pub fn store(&self) -> &EntityStore<InventoryRecord> {
        &self.store
    }

    pub fn history(&self) -> &[ImportHistoryEntry] {
        &self.history
    }

    /// 入库: 增加数量并追加一条历史
    pub fn import(&mut self, inventory_id: i64, delta: BigDecimal, today: NaiveDate) -> Result<ImportHistoryEntry> {
        validate_import(&delta)?;
        let mut inv = self
            .store
            .get(inventory_id)
            .cloned()
            .ok_or_else(|| FarmError::NotFound(format!("inventory {}", inventory_id)))?;

        inv.quantity = &inv.quantity + &delta;
        let mut entry = ImportHistoryEntry::new(inv.item.clone(), delta, inv.unit_price.clone(), today);
        entry.unit = inv.unit.clone();

        self.store.update_by_id(inventory_id, inv);
        self.history.push(entry.clone());
        Ok(entry)
    }

    /// 出库: 先校验上限, 校验通过后才修改数量; 返回新数量
    pub fn export(&mut self, inventory_id: i64, amount: &BigDecimal) -> Result<BigDecimal> {
        let mut inv = self
            .store
            .get(inventory_id)
            .cloned()
            .ok_or_else(|| FarmError::NotFound(format!("inventory {}", inventory_id)))?;
        validate_export(&inv, amount)?;

        inv.quantity = &inv.quantity - amount;
        let remaining = inv.quantity.clone();
        self.store.update_by_id(inventory_id, inv);
        Ok(remaining)
    }

    pub fn total_value(&self) -> BigDecimal {
        total_inventory_value(self.store.items())
    }

    pub fn total_import_cost(&self) -> BigDecimal {
        total_import_cost(&self.history)
    }
}

/// 库存页控制器: 加载/入库/出库/历史/删除
pub struct InventoryController<R> {
    inner: ResourceController<InventoryRecord, R>,
    history: Vec<ImportHistoryEntry>,
}

impl<R> InventoryController<R>
where
    R: RemoteCollection<InventoryRecord> + InventoryRemote,
{
    pub fn new(resource: Resource, remote: R, items_per_page: usize) -> Self {
        Self {
            inner: ResourceController::new(resource, remote, items_per_page),
            history: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FailureObserver>) -> Self {
        self.inner = self.inner.with_observer(observer);
        self
    }

    /// 列表/搜索/分页/删除沿用通用控制器
    pub fn list(&self) -> &ResourceController<InventoryRecord, R> {
        &self.inner
    }

    pub fn list_mut(&mut self) -> &mut ResourceController<InventoryRecord, R> {
        &mut self.inner
    }

    pub fn items(&self) -> &[InventoryRecord] {
        self.inner.store().items()
    }

    pub fn history(&self) -> &[ImportHistoryEntry] {
        &self.history
    }

    pub fn total_import_cost(&self) -> BigDecimal {
        total_import_cost(&self.history)
    }

    pub fn overview(&self, today: NaiveDate) -> InventoryOverview {
        InventoryOverview::compute(self.items(), today)
    }

    pub async fn load(&mut self) -> Result<usize> {
        self.inner.load().await
    }

    /// 重新拉取入库历史, 返回总成本
    pub async fn load_history(&mut self) -> Result<BigDecimal> {
        match self.inner.remote().history().await {
            Ok(history) => {
                self.history = history;
                Ok(self.total_import_cost())
            }
            Err(e) => {
                self.inner.report(Operation::History, &e);
                Err(e)
            }
        }
    }

    /// 入库: 数量校验 -> 远程入库 -> 写回返回的库存行并追加历史
    pub async fn import(&mut self, payload: InventoryRecord, today: NaiveDate) -> Result<InventoryRecord> {
        validate_import(&payload.quantity)?;

        let saved = match self.inner.remote().import(&payload).await {
            Ok(saved) => saved,
            Err(e) => {
                self.inner.report(Operation::Import, &e);
                return Err(e);
            }
        };

        // 返回的库存行必须带 id, 否则无法与本地集合对应
        if saved.id.is_none() {
            tracing::warn!("[{}] import returned a record without id", self.inner.resource().path());
            return Err(ValidationError::MissingId.into());
        }

        let mut entry = ImportHistoryEntry::new(
            payload.item.clone(),
            payload.quantity.clone(),
            payload.unit_price.clone(),
            today,
        );
        entry.unit = payload.unit.clone();
        self.history.push(entry);
        self.inner.store_mut().upsert(saved.clone());
        tracing::info!(
            "[{}] imported {} into inventory {:?}",
            self.inner.resource().path(),
            payload.quantity,
            saved.id
        );
        Ok(saved)
    }

    /// 打开出库; 本地不存在该 id 时返回 false
    pub fn begin_export(&mut self, id: i64) -> bool {
        if self.inner.store().get(id).is_none() {
            return false;
        }
        self.inner.set_mode(ViewMode::Exporting(id));
        true
    }

    pub fn cancel_export(&mut self) {
        if matches!(self.inner.mode(), ViewMode::Exporting(_)) {
            self.inner.set_mode(ViewMode::Idle);
        }
    }

    /// 出库: 在发起请求前按当前库存校验数量; 失败时保持出库状态
    pub async fn export(&mut self, amount: BigDecimal) -> Result<InventoryRecord> {
        let ViewMode::Exporting(id) = self.inner.mode() else {
            return Err(ValidationError::InvalidMode("export").into());
        };
        let current = self
            .inner
            .store()
            .get(id)
            .ok_or_else(|| FarmError::NotFound(format!("inventory {}", id)))?;
        validate_export(current, &amount)?;

        let updated = match self.inner.remote().export(id, &amount).await {
            Ok(updated) => updated,
            Err(e) => {
                self.inner.report(Operation::Export, &e);
                return Err(e);
            }
        };

        self.inner.store_mut().update_by_id(id, updated.clone());
        self.inner.set_mode(ViewMode::Idle);
        Ok(updated)
    }
}
