/// Inline stylesheet for the directory page.
pub const PAGE_STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
main { max-width: 48rem; margin: 0 auto; }
.section { margin-bottom: 1.5rem; padding: 1rem; border: 1px solid #ddd; border-radius: 6px; }
.section h3 { margin-top: 0; }
.section h4 { margin: 0.75rem 0 0.25rem; font-size: 0.95rem; color: #555; }
.student, .course, .instructor { padding: 0.15rem 0; }
.student.highlight { font-weight: 600; background: #fff6d5; }
"#;
