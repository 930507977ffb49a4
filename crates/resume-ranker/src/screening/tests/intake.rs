use super::common::*;
use crate::screening::intake::{DocumentKind, IntakeError, ResumeIntake, ResumeUpload};

#[test]
fn plain_text_uploads_become_notes() {
    let intake = ResumeIntake::new();

    let candidate = intake
        .admit(text_upload("Ada Lovelace.txt", "Python and SQL, 6 years"))
        .expect("text upload admitted");

    assert_eq!(candidate.name, "Ada Lovelace");
    assert_eq!(candidate.notes, "Python and SQL, 6 years");
    assert!(candidate.skills.is_empty());
    assert!(candidate.id.as_str().starts_with("cand-"));

    let source = candidate.source.expect("source recorded");
    assert_eq!(source.file_name, "Ada Lovelace.txt");
    assert_eq!(source.content_type, "text/plain");
    assert_eq!(source.size_bytes, "Python and SQL, 6 years".len() as u64);
}

#[test]
fn binary_formats_are_admitted_without_notes() {
    let intake = ResumeIntake::new();

    let candidate = intake
        .admit(pdf_upload("grace.hopper.pdf"))
        .expect("pdf admitted");

    assert_eq!(candidate.name, "grace.hopper");
    assert!(candidate.notes.is_empty());
    let source = candidate.source.expect("source recorded");
    assert_eq!(source.content_type, DocumentKind::Pdf.mime_type());
    assert_eq!(source.size_bytes, 48_213);
}

#[test]
fn blank_content_type_is_guessed_from_file_name() {
    let intake = ResumeIntake::new();

    let docx = intake
        .admit(ResumeUpload::new("resume.docx", ""))
        .expect("docx admitted");
    let text = intake
        .admit(ResumeUpload::new("notes.txt", "").with_content("Rust"))
        .expect("txt admitted");

    assert_eq!(
        docx.source.expect("source").content_type,
        DocumentKind::Docx.mime_type()
    );
    assert_eq!(text.notes, "Rust");
}

#[test]
fn content_type_parameters_are_tolerated() {
    let intake = ResumeIntake::new();

    let candidate = intake
        .admit(ResumeUpload::new("cv.txt", "Text/Plain; charset=utf-8").with_content("Go"))
        .expect("text admitted");

    assert_eq!(candidate.notes, "Go");
}

#[test]
fn unsupported_types_are_rejected() {
    let intake = ResumeIntake::new();

    match intake.admit(ResumeUpload::new("portfolio.zip", "application/zip")) {
        Err(IntakeError::UnsupportedType {
            file_name,
            content_type,
        }) => {
            assert_eq!(file_name, "portfolio.zip");
            assert_eq!(content_type, "application/zip");
        }
        other => panic!("expected unsupported type, got {other:?}"),
    }
}

#[test]
fn missing_file_name_is_rejected() {
    let intake = ResumeIntake::new();

    assert!(matches!(
        intake.admit(ResumeUpload::new("  ", "text/plain")),
        Err(IntakeError::MissingFileName)
    ));
}

#[test]
fn generated_ids_are_unique() {
    let intake = ResumeIntake::new();

    let first = intake.admit(text_upload("a.txt", "")).expect("admitted");
    let second = intake.admit(text_upload("a.txt", "")).expect("admitted");

    assert_ne!(first.id, second.id);
}
