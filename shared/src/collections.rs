//! Collections editor draft: the form state behind the gallery's add/edit
//! panel, generic over the platform file handle.

use crate::http::FormPart;
use crate::models::CollectionItem;

/// Resolve a stored image reference. Absolute URLs pass through; anything else
/// is a media key served from `<api base>/media/<key>`.
pub fn media_url(api_base_url: &str, image: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        format!("{}/media/{}", api_base_url.trim_end_matches('/'), image)
    }
}

/// Where a submitted draft goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDraft<F> {
    pub editing_id: Option<String>,
    pub title: String,
    pub tags: Vec<String>,
    pub file: Option<F>,
    pub preview: Option<String>,
}

impl<F> Default for CollectionDraft<F> {
    fn default() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            tags: Vec::new(),
            file: None,
            preview: None,
        }
    }
}

impl<F: Clone> CollectionDraft<F> {
    /// Pre-fill from an existing item. The stored image becomes the preview;
    /// no file is attached until the admin picks one.
    pub fn editing(item: &CollectionItem, api_base_url: &str) -> Self {
        Self {
            editing_id: Some(item.id.clone()),
            title: item.title.clone(),
            tags: item.tags.clone(),
            file: None,
            preview: item.image.as_deref().map(|image| media_url(api_base_url, image)),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Add a tag unless it is blank or already present. Returns whether it
    /// was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn attach(&mut self, file: F, preview: Option<String>) {
        self.file = Some(file);
        self.preview = preview;
    }

    /// A draft is submittable with a title and either a new file or an item
    /// being edited.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && (self.file.is_some() || self.is_editing())
    }

    pub fn target(&self) -> SaveTarget {
        match &self.editing_id {
            Some(id) => SaveTarget::Update(id.clone()),
            None => SaveTarget::Create,
        }
    }

    /// Multipart fields in send order: `title`, optional `photo`, then `tags`
    /// as a JSON array.
    pub fn form_parts(&self) -> Vec<(String, FormPart<F>)> {
        let mut parts = vec![("title".to_string(), FormPart::Text(self.title.clone()))];
        if let Some(file) = &self.file {
            parts.push(("photo".to_string(), FormPart::File(file.clone())));
        }
        let tags = serde_json::to_string(&self.tags).unwrap_or_else(|_| "[]".to_string());
        parts.push(("tags".to_string(), FormPart::Text(tags)));
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CollectionItem {
        CollectionItem {
            id: "c1".into(),
            title: "Midnight Silk".into(),
            image: Some("silk.jpg".into()),
            tags: vec!["evening".into()],
        }
    }

    #[test]
    fn test_media_url() {
        assert_eq!(media_url("http://localhost:5000/api", "a.jpg"), "http://localhost:5000/api/media/a.jpg");
        assert_eq!(media_url("http://x/api/", "a.jpg"), "http://x/api/media/a.jpg");
        assert_eq!(media_url("http://x/api", "https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_submit_needs_title_and_file_or_edit() {
        let mut draft = CollectionDraft::<u8>::default();
        draft.title = "Gold Gown".into();
        assert!(!draft.can_submit());

        draft.attach(7, Some("data:image/png;base64,AAAA".into()));
        assert!(draft.can_submit());
        assert_eq!(draft.target(), SaveTarget::Create);

        let mut blank = CollectionDraft::<u8>::default();
        blank.attach(1, None);
        assert!(!blank.can_submit());

        let editing = CollectionDraft::<u8>::editing(&item(), "http://x/api");
        assert!(editing.can_submit());
        assert_eq!(editing.target(), SaveTarget::Update("c1".into()));
        assert_eq!(editing.preview.as_deref(), Some("http://x/api/media/silk.jpg"));
    }

    #[test]
    fn test_tags_skip_blank_and_duplicates() {
        let mut draft = CollectionDraft::<u8>::editing(&item(), "http://x/api");
        assert!(!draft.add_tag("evening"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("silk"));
        draft.remove_tag("evening");
        assert_eq!(draft.tags, vec!["silk".to_string()]);
    }

    #[test]
    fn test_form_parts() {
        let mut draft = CollectionDraft::<u8>::default();
        draft.title = "Gold Gown".into();
        draft.add_tag("gala");
        assert_eq!(
            draft.form_parts(),
            vec![
                ("title".to_string(), FormPart::Text("Gold Gown".into())),
                ("tags".to_string(), FormPart::Text("[\"gala\"]".into())),
            ]
        );

        draft.attach(9, None);
        let parts = draft.form_parts();
        assert_eq!(parts[1], ("photo".to_string(), FormPart::File(9)));
        assert_eq!(parts.len(), 3);
    }
}
