// src/types/query.rs

use serde::Serialize;

use super::pagination::PageRequest;

/// クエリパラメータの組み立て
///
/// 値が `None` の項目は送らない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(page: PageRequest) -> Self {
        Self::new()
            .set("page", page.page)
            .set("size", page.size)
    }

    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
        self
    }

    pub fn set_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// 後から渡された値で上書きしてマージ
    pub fn merge(mut self, other: &QueryParams) -> Self {
        for (key, value) in &other.0 {
            self = self.set(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// キャッシュキー用の正規化表現（キー順）
    pub fn canonical(&self) -> String {
        let mut pairs: Vec<_> = self.0.iter().collect();
        pairs.sort();
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// パスセグメントとして安全に埋め込む
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
