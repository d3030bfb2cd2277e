use super::*;

fn valid_draft() -> BookDraft {
    BookDraft {
        title: "Dune".to_string(),
        description: "Desert planet".to_string(),
        price: "20".to_string(),
        discount: "25".to_string(),
        category: "Sci-Fi".to_string(),
        author: "Frank Herbert".to_string(),
        has_source: true,
        has_cover: true,
        has_sample: true,
        require_files: true,
    }
}

#[test]
fn empty_create_form_yields_one_error_per_required_field() {
    let draft = BookDraft {
        require_files: true,
        ..BookDraft::default()
    };
    let errors = validate_book(&draft);
    // title, description, price, category, author, sourcePath, coverImage, samplePdf
    assert_eq!(errors.len(), 8);
    for field in [
        "title",
        "description",
        "price",
        "category",
        "author",
        "sourcePath",
        "coverImage",
        "samplePdf",
    ] {
        assert!(errors.get(field).is_some(), "missing error for {field}");
    }
}

#[test]
fn valid_draft_passes() {
    assert!(validate_book(&valid_draft()).is_empty());
}

#[test]
fn edit_does_not_require_files() {
    let draft = BookDraft {
        has_source: false,
        has_cover: false,
        has_sample: false,
        require_files: false,
        ..valid_draft()
    };
    assert!(validate_book(&draft).is_empty());
}

#[test]
fn discount_of_100_is_accepted_and_101_rejected() {
    let mut draft = valid_draft();
    draft.discount = "100".to_string();
    assert!(validate_book(&draft).is_empty());

    draft.discount = "101".to_string();
    let errors = validate_book(&draft);
    assert_eq!(errors.len(), 1);
    assert!(errors.get("discount").is_some());
}

#[test]
fn negative_values_are_rejected() {
    let mut draft = valid_draft();
    draft.price = "-1".to_string();
    assert!(validate_book(&draft).get("price").is_some());

    let mut draft = valid_draft();
    draft.discount = "-5".to_string();
    assert!(validate_book(&draft).get("discount").is_some());
}

#[test]
fn non_numeric_price_is_rejected() {
    let mut draft = valid_draft();
    draft.price = "abc".to_string();
    assert!(validate_book(&draft).get("price").is_some());
}

#[test]
fn five_mib_pdf_is_rejected_and_four_mib_accepted() {
    let five_mib = 5 * 1024 * 1024;
    assert!(check_file(FileKind::Pdf, "application/pdf", five_mib).is_err());
    // exactly at the ceiling passes
    assert!(check_file(FileKind::Pdf, "application/pdf", MAX_FILE_BYTES).is_ok());
    assert!(check_file(FileKind::Pdf, "application/pdf", MAX_FILE_BYTES + 1).is_err());
}

#[test]
fn sample_must_be_a_pdf_and_cover_an_image() {
    assert!(check_file(FileKind::Pdf, "image/png", 100).is_err());
    assert!(check_file(FileKind::Image, "application/pdf", 100).is_err());
    assert!(check_file(FileKind::Image, "image/jpeg", 100).is_ok());
}

#[test]
fn author_name_must_be_unique_case_insensitively() {
    let existing = vec!["Frank Herbert".to_string()];
    let errors = validate_author("frank herbert", true, true, &existing);
    assert!(errors.get("name").is_some());

    let errors = validate_author("Ursula K. Le Guin", true, true, &existing);
    assert!(errors.is_empty());
}

#[test]
fn author_image_only_required_on_create() {
    let errors = validate_author("New Author", false, true, &[]);
    assert!(errors.get("image").is_some());

    let errors = validate_author("New Author", false, false, &[]);
    assert!(errors.is_empty());
}

#[test]
fn category_title_required() {
    assert!(validate_category("  ").get("title").is_some());
    assert!(validate_category("Poetry").is_empty());
}
