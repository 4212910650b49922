#![allow(dead_code)]

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use pig_farm_rust::error::{FarmError, Result};
use pig_farm_rust::models::{ImportHistoryEntry, InventoryRecord, Record, Sow, StockRef};
use pig_farm_rust::remote::{InventoryRemote, RemoteCollection, Resource};
use pig_farm_rust::service::{FailureObserver, Operation};
use std::sync::Mutex;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sow(id: Option<i64>, tag: &str) -> Sow {
    Sow {
        id,
        tag_number: tag.to_string(),
        breed: "Yorkshire".to_string(),
        birth_date: date(2022, 6, 1),
        origin: "Trại Ba Vì".to_string(),
        status: "Đang mang thai".to_string(),
        notes: None,
    }
}

pub fn inventory(id: i64, medicine_id: i64, quantity: i64, unit_price: i64) -> InventoryRecord {
    InventoryRecord {
        id: Some(id),
        item: StockRef::medicine(medicine_id),
        kind: Some("Kháng sinh".to_string()),
        quantity: BigDecimal::from(quantity),
        unit: Some("viên".to_string()),
        min_quantity: Some(BigDecimal::from(20)),
        max_quantity: Some(BigDecimal::from(500)),
        unit_price: Some(BigDecimal::from(unit_price)),
        expiry_date: None,
        location: Some("Kho A".to_string()),
        last_updated: None,
    }
}

pub trait AssignId {
    fn assign_id(&mut self, id: i64);
}

impl AssignId for Sow {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl AssignId for InventoryRecord {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[derive(Debug)]
pub struct FakeState<T> {
    pub items: Vec<T>,
    pub history: Vec<ImportHistoryEntry>,
    pub next_id: i64,
    pub failing: bool,
    /// 模拟不回传 id 的服务端
    pub omit_ids: bool,
    pub calls: Vec<&'static str>,
}

/// 内存中的远程集合, 服务端行为: 分配递增 id, 可切换为全部失败
pub struct FakeRemote<T> {
    pub state: Mutex<FakeState<T>>,
}

impl<T: Record> FakeRemote<T> {
    pub fn new(items: Vec<T>) -> Self {
        let next_id = items.iter().filter_map(|i| i.id()).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeState {
                items,
                history: Vec::new(),
                next_id,
                failing: false,
                omit_ids: false,
                calls: Vec::new(),
            }),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn set_omit_ids(&self, omit: bool) {
        self.state.lock().unwrap().omit_ids = omit;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn server_items(&self) -> Vec<T> {
        self.state.lock().unwrap().items.clone()
    }
}

fn begin<T>(state: &mut FakeState<T>, call: &'static str) -> Result<()> {
    state.calls.push(call);
    if state.failing {
        return Err(FarmError::Transport("connection refused".to_string()));
    }
    Ok(())
}

fn not_found(id: i64) -> FarmError {
    FarmError::Status {
        status: 404,
        url: format!("fake/{}", id),
    }
}

#[async_trait]
impl<T: Record + AssignId> RemoteCollection<T> for FakeRemote<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "list")?;
        Ok(state.items.clone())
    }

    async fn get(&self, id: i64) -> Result<T> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "get")?;
        state
            .items
            .iter()
            .find(|i| i.id() == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, item: &T) -> Result<T> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "create")?;
        let mut created = item.clone();
        created.assign_id(state.next_id);
        state.next_id += 1;
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, item: &T) -> Result<T> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "update")?;
        let slot = state
            .items
            .iter_mut()
            .find(|i| i.id() == Some(id))
            .ok_or_else(|| not_found(id))?;
        let mut updated = item.clone();
        updated.assign_id(id);
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "delete")?;
        let before = state.items.len();
        state.items.retain(|i| i.id() != Some(id));
        if state.items.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryRemote for FakeRemote<InventoryRecord> {
    async fn import(&self, item: &InventoryRecord) -> Result<InventoryRecord> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "import")?;
        let omit_ids = state.omit_ids;
        let ref_id = item.item.resource_ref_id();
        let entry = ImportHistoryEntry::new(
            item.item.clone(),
            item.quantity.clone(),
            item.unit_price.clone(),
            date(2024, 3, 1),
        );
        state.history.push(entry);

        if let Some(existing) = state
            .items
            .iter_mut()
            .find(|i| i.item.resource_ref_id() == ref_id)
        {
            existing.quantity = &existing.quantity + &item.quantity;
            let mut saved = existing.clone();
            if omit_ids {
                saved.id = None;
            }
            return Ok(saved);
        }
        let mut created = item.clone();
        created.assign_id(state.next_id);
        state.next_id += 1;
        state.items.push(created.clone());
        if omit_ids {
            created.id = None;
        }
        Ok(created)
    }

    async fn export(&self, id: i64, amount: &BigDecimal) -> Result<InventoryRecord> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "export")?;
        let existing = state
            .items
            .iter_mut()
            .find(|i| i.id == Some(id))
            .ok_or_else(|| not_found(id))?;
        existing.quantity = &existing.quantity - amount;
        Ok(existing.clone())
    }

    async fn history(&self) -> Result<Vec<ImportHistoryEntry>> {
        let mut state = self.state.lock().unwrap();
        begin(&mut state, "history")?;
        Ok(state.history.clone())
    }
}

/// 记录所有失败上报
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<(Resource, Operation)>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<(Resource, Operation)> {
        self.events.lock().unwrap().clone()
    }
}

impl FailureObserver for RecordingObserver {
    fn on_failure(&self, resource: Resource, op: Operation, _error: &FarmError) {
        self.events.lock().unwrap().push((resource, op));
    }
}
