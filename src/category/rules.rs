use crate::category::Category;
use crate::url::page_path;

/// Path segment that marks a category listing
const CATEGORY_SEGMENT: &str = "category";
const TUTORIAL_MARKER: &str = "tutorial";
const VIDEO_MARKER: &str = "learn-video";
const CONTACT_MARKER: &str = "contact";
const NEWS_MARKERS: &[&str] = &["information", "update"];
const CASE_STUDY_MARKERS: &[&str] = &["interview", "introduction_example"];

/// Classifies a URL path into a category
///
/// Rules are checked in this order and the first match wins:
///
/// | # | Rule | Category |
/// |---|------|----------|
/// | 1 | at most one non-empty segment | `TopPage` |
/// | 2 | a segment equal to `category` | `CategoryListing` |
/// | 3 | contains `tutorial` | `Tutorial` |
/// | 4 | contains `learn-video` | `VideoLesson` |
/// | 5 | contains `contact` | `Contact` |
/// | 6 | contains `information` or `update` | `News` |
/// | 7 | contains `interview` or `introduction_example` | `CaseStudy` |
/// | 8 | anything else | `Article` |
///
/// Rules 3-7 are substring tests on the whole path, not segment tests.
///
/// # Examples
///
/// ```
/// use manual_mapper::{classify, Category};
///
/// assert_eq!(classify("/manual/"), Category::TopPage);
/// assert_eq!(classify("/manual/category/friends/"), Category::CategoryListing);
/// assert_eq!(classify("/manual/tutorial/basics/"), Category::Tutorial);
/// assert_eq!(classify("/manual/how-to-send/"), Category::Article);
/// ```
pub fn classify(path: &str) -> Category {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() <= 1 {
        Category::TopPage
    } else if segments.contains(&CATEGORY_SEGMENT) {
        Category::CategoryListing
    } else if path.contains(TUTORIAL_MARKER) {
        Category::Tutorial
    } else if path.contains(VIDEO_MARKER) {
        Category::VideoLesson
    } else if path.contains(CONTACT_MARKER) {
        Category::Contact
    } else if contains_any(path, NEWS_MARKERS) {
        Category::News
    } else if contains_any(path, CASE_STUDY_MARKERS) {
        Category::CaseStudy
    } else {
        Category::Article
    }
}

/// Classifies the path component of a full URL
pub fn classify_url(url: &str) -> Category {
    classify(&page_path(url))
}

fn contains_any(path: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| path.contains(marker))
}
