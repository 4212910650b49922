use crate::models::Record;

/// 关键字过滤: 去掉首尾空白后做不区分大小写的子串匹配, 空关键字返回全部
pub fn filter<'a, T: Record>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

/// 总页数, 最少 1 页
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1)).max(1)
}

/// 第 `page` 页 (从 1 开始) 的切片, 越界返回空
pub fn page_slice<X>(items: &[X], page: usize, items_per_page: usize) -> &[X] {
    let per = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + per).min(items.len());
    &items[start..end]
}

/// 列表视图状态: 关键字 + 当前页, 结果每次从集合重新推导
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    search_term: String,
    current_page: usize,
    items_per_page: usize,
}

impl ListView {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// 修改关键字总是回到第 1 页
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn filtered<'a, T: Record>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter(items, &self.search_term)
    }

    pub fn total_pages<T: Record>(&self, items: &[T]) -> usize {
        total_pages(self.filtered(items).len(), self.items_per_page)
    }

    /// 当前页的记录
    pub fn page<'a, T: Record>(&self, items: &'a [T]) -> Vec<&'a T> {
        let filtered = self.filtered(items);
        page_slice(&filtered, self.current_page, self.items_per_page).to_vec()
    }

    /// 只接受 1..=total_pages 范围内的页码
    pub fn change_page<T: Record>(&mut self, items: &[T], requested: usize) -> bool {
        if requested >= 1 && requested <= self.total_pages(items) {
            self.current_page = requested;
            true
        } else {
            false
        }
    }

    /// 删除后当前页超出总页数时退回最后一页
    pub fn clamp_page<T: Record>(&mut self, items: &[T]) {
        let total = self.total_pages(items);
        if self.current_page > total {
            self.current_page = total;
        }
    }
}
