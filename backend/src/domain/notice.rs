//! Notice board posts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::define_label_enum;
use super::validation::{FieldError, required_text};
use super::UserId;

define_label_enum! {
    /// Notice category.
    pub enum NoticeType as "notice type" {
        General => "General",
        Emergency => "Emergency",
        Rule => "Rule",
    }
}

/// Stored notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
    pub is_pinned: bool,
    pub posted_by: UserId,
    pub read_by: Vec<UserId>,
    pub created_at: NaiveDateTime,
}

/// Validated notice from a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotice {
    title: String,
    content: String,
    notice_type: NoticeType,
    is_pinned: bool,
    posted_by: UserId,
}

impl NewNotice {
    pub fn try_new(
        title: &str,
        content: &str,
        notice_type: Option<NoticeType>,
        is_pinned: bool,
        posted_by: UserId,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            title: required_text("title", title)?,
            content: required_text("content", content)?,
            notice_type: notice_type.unwrap_or(NoticeType::General),
            is_pinned,
            posted_by,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn notice_type(&self) -> NoticeType {
        self.notice_type
    }

    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    pub fn posted_by(&self) -> UserId {
        self.posted_by
    }
}
