//! Topical categories for crawled pages
//!
//! Every page lands in exactly one [`Category`], decided from its URL path by
//! an ordered list of marker rules (see [`classify`]).

mod rules;

pub use rules::{classify, classify_url};

use serde::{Serialize, Serializer};
use std::fmt;

/// Category a page is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The manual root or a single-segment path
    TopPage,
    /// A category listing page
    CategoryListing,
    /// Tutorial pages
    Tutorial,
    /// Video learning pages
    VideoLesson,
    /// Contact pages
    Contact,
    /// Announcements and release updates
    News,
    /// Interviews and customer case studies
    CaseStudy,
    /// Everything else: regular articles and manual pages
    Article,
}

impl Category {
    /// All categories in rule priority order
    pub const ALL: [Category; 8] = [
        Self::TopPage,
        Self::CategoryListing,
        Self::Tutorial,
        Self::VideoLesson,
        Self::Contact,
        Self::News,
        Self::CaseStudy,
        Self::Article,
    ];

    /// Label written into reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::TopPage => "トップページ",
            Self::CategoryListing => "カテゴリページ",
            Self::Tutorial => "チュートリアル",
            Self::VideoLesson => "動画学習",
            Self::Contact => "お問い合わせ",
            Self::News => "お知らせ・アップデート",
            Self::CaseStudy => "導入事例",
            Self::Article => "記事・マニュアル",
        }
    }

    /// English name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopPage => "top page",
            Self::CategoryListing => "category listing page",
            Self::Tutorial => "tutorial",
            Self::VideoLesson => "video lesson",
            Self::Contact => "contact",
            Self::News => "news/update",
            Self::CaseStudy => "case study",
            Self::Article => "article/manual",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
