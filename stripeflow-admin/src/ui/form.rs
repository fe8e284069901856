// src/ui/form.rs

//! フォームのエラー表示状態
//!
//! クライアント側バリデーションとサーバーの422は同じ [`ApiError::Validation`]
//! になるので、どちらもフィールド単位のエラーとして扱う。それ以外の失敗だけを
//! フォーム全体のエラーとして表示する。

use std::collections::BTreeMap;

use crate::error::{ApiError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    field_errors: BTreeMap<String, Vec<String>>,
    general_error: Option<String>,
    submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送信開始（前回のエラーは消す）
    pub fn begin_submit(&mut self) {
        self.clear();
        self.submitting = true;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// 送信結果を反映し、成功なら値を返す
    pub fn finish<T>(&mut self, result: AppResult<T>) -> Option<T> {
        self.submitting = false;
        match result {
            Ok(value) => {
                self.clear();
                Some(value)
            }
            Err(err) => {
                self.apply_error(&err);
                None
            }
        }
    }

    pub fn apply_error(&mut self, error: &ApiError) {
        match error.field_errors() {
            Some(fields) if !fields.is_empty() => {
                for (field, messages) in fields {
                    self.field_errors
                        .entry(camel_case(field))
                        .or_default()
                        .extend(messages.iter().cloned());
                }
            }
            _ => self.general_error = Some(error.user_message()),
        }
    }

    /// フィールドの最初のエラーメッセージ（キーはcamelCase）
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .get(&camel_case(field))
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn field_errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.field_errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || self.general_error.is_some()
    }

    pub fn clear(&mut self) {
        self.field_errors.clear();
        self.general_error = None;
    }

    /// 表示用の行（"field: message"）
    pub fn error_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .field_errors
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{}: {}", field, m)))
            .collect();
        if let Some(general) = &self.general_error {
            lines.push(general.clone());
        }
        lines
    }
}

// バリデーターのフィールド名はsnake_case、サーバーはcamelCase
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
