// src/types/pagination.rs

use serde::{Deserialize, Serialize};

/// デフォルトページサイズ
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// 最大ページサイズ
pub const MAX_PAGE_SIZE: u32 = 100;

/// ページ指定（ページ番号は0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// サイズは1..=MAX_PAGE_SIZEに丸める
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn first(size: u32) -> Self {
        Self::new(0, size)
    }

    pub fn next(&self) -> Self {
        Self::new(self.page.saturating_add(1), self.size)
    }

    pub fn previous(&self) -> Option<Self> {
        self.page
            .checked_sub(1)
            .map(|page| Self::new(page, self.size))
    }

    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

/// ページネーション付きレスポンス
///
/// バックエンドのページ形式（`content`, `number`, `totalElements` ...）をそのまま受ける。
/// `first` / `last` が省略された場合は他のフィールドから導出する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub last: Option<bool>,
}

impl<T> Page<T> {
    /// 全件からページを切り出す（テストやローカル集計用）
    pub fn from_items(items: Vec<T>, request: PageRequest) -> Self {
        let total_elements = items.len() as u64;
        let content: Vec<T> = items
            .into_iter()
            .skip(request.offset())
            .take(request.size as usize)
            .collect();
        let total_pages = total_pages(total_elements, request.size);

        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: Some(request.page == 0),
            last: Some(request.page.saturating_add(1) >= total_pages),
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::from_items(Vec::new(), request)
    }

    pub fn is_first(&self) -> bool {
        self.first.unwrap_or(self.number == 0)
    }

    pub fn is_last(&self) -> bool {
        self.last
            .unwrap_or(self.number.saturating_add(1) >= self.total_pages)
    }

    pub fn has_next(&self) -> bool {
        !self.is_last()
    }

    pub fn has_previous(&self) -> bool {
        !self.is_first()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }

    /// 「Page 1 of 3 (45 total)」形式の要約（表示は1始まり）
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} total)",
            self.number.saturating_add(1),
            self.total_pages.max(1),
            self.total_elements
        )
    }
}

pub fn total_pages(total_elements: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    total_elements.div_ceil(size as u64) as u32
}
