//! Client-side form validation.
//!
//! Runs at submit time, with file checks additionally applied per change.
//! Errors are keyed by field name and rendered inline next to the offending
//! input; a form with any error never reaches the network.

use std::collections::BTreeMap;

/// Upload ceiling for every file attachment.
pub const MAX_FILE_BYTES: u64 = 4 * 1024 * 1024;

/// Per-field error map. Field names are the model attribute names the form
/// inputs are bound to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Sample and full-book uploads.
    Pdf,
    /// Cover and author portrait uploads.
    Image,
}

/// MIME and size check for one selected file.
pub fn check_file(kind: FileKind, mime: &str, size: u64) -> Result<(), String> {
    match kind {
        FileKind::Pdf if mime != "application/pdf" => {
            return Err("Only PDF files are allowed".to_string());
        }
        FileKind::Image if !mime.starts_with("image/") => {
            return Err("Only image files are allowed".to_string());
        }
        _ => {}
    }
    if size > MAX_FILE_BYTES {
        return Err("File size must be at most 4 MB".to_string());
    }
    Ok(())
}

/// Everything the book form holds at submit time. Numeric inputs arrive as
/// the raw strings the user typed; files are reduced to presence flags since
/// MIME and size were already checked on selection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub discount: String,
    pub category: String,
    pub author: String,
    pub has_source: bool,
    pub has_cover: bool,
    pub has_sample: bool,
    /// Files are required on create; on edit a missing file keeps the
    /// existing upload.
    pub require_files: bool,
}

pub fn validate_book(draft: &BookDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.title.trim().is_empty() {
        errors.insert("title", "Title is required");
    }
    if draft.description.trim().is_empty() {
        errors.insert("description", "Description is required");
    }

    if draft.price.trim().is_empty() {
        errors.insert("price", "Price is required");
    } else {
        match draft.price.trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => {}
            Ok(_) => errors.insert("price", "Price must not be negative"),
            Err(_) => errors.insert("price", "Price must be a number"),
        }
    }

    // empty discount means no discount
    if !draft.discount.trim().is_empty() {
        match draft.discount.trim().parse::<f64>() {
            Ok(d) if (0.0..=100.0).contains(&d) => {}
            Ok(_) => errors.insert("discount", "Discount must be between 0 and 100"),
            Err(_) => errors.insert("discount", "Discount must be a number"),
        }
    }

    if draft.category.is_empty() {
        errors.insert("category", "Category is required");
    }
    if draft.author.is_empty() {
        errors.insert("author", "Author is required");
    }

    if draft.require_files {
        if !draft.has_source {
            errors.insert("sourcePath", "Full book file is required");
        }
        if !draft.has_cover {
            errors.insert("coverImage", "Cover image is required");
        }
        if !draft.has_sample {
            errors.insert("samplePdf", "Sample PDF is required");
        }
    }

    errors
}

/// Author form: name plus portrait image. `existing` holds the other
/// authors' names for the uniqueness check; the record being edited must be
/// excluded by the caller.
pub fn validate_author(
    name: &str,
    has_image: bool,
    require_image: bool,
    existing: &[String],
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.insert("name", "Author name is required");
    } else if existing
        .iter()
        .any(|n| n.trim().eq_ignore_ascii_case(trimmed))
    {
        errors.insert("name", "Author name must be unique");
    }

    if require_image && !has_image {
        errors.insert("image", "Author image is required");
    }

    errors
}

pub fn validate_category(title: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if title.trim().is_empty() {
        errors.insert("title", "Category title is required");
    }
    errors
}

#[cfg(test)]
mod tests;
