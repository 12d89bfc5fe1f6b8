use corpusify::config::ScanConfig;
use corpusify::source::collect_inputs;
use corpusify::{output, ExportMode, InputFile, Pipeline};
use serde_json::Value;
use std::io::{Cursor, Write};
use tempfile::tempdir;
use zip::write::FileOptions;
use zip::ZipWriter;

fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        zip.start_file(*name, FileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn slide(text: &str) -> String {
    format!(
        r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:sp><p:txBody><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#,
        text
    )
}

#[test]
fn test_mixed_batch_to_plain_text() {
    let docx = zip_bytes(&[(
        "word/document.xml",
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p></w:body></w:document>"#,
    )]);
    let files = vec![
        InputFile::new("letter.docx", docx),
        InputFile::new("photo.png", b"\x89PNG".to_vec()),
        InputFile::new("notes.txt", b"plain notes".to_vec()),
    ];

    let rendered = Pipeline::default()
        .run(&files, ExportMode::Text)
        .render()
        .unwrap();

    assert_eq!(
        rendered,
        "\n\n==== BEGIN FILE: letter.docx ====\n\nHello world\n\n\n==== END FILE: letter.docx ====\n\n\
         \n\n==== BEGIN FILE: photo.png ====\n\n[Unsupported file type: png]\n\n==== END FILE: photo.png ====\n\n\
         \n\n==== BEGIN FILE: notes.txt ====\n\nplain notes\n\n==== END FILE: notes.txt ====\n\n"
    );
}

#[test]
fn test_pptx_and_broken_xlsx_to_jsonl() {
    let pptx = zip_bytes(&[
        ("ppt/slides/slide2.xml", slide("Second").as_str()),
        ("ppt/slides/slide1.xml", slide("First").as_str()),
    ]);
    let files = vec![
        InputFile::new("deck.pptx", pptx),
        InputFile::new("sheet.xlsx", b"not a zip".to_vec()),
    ];

    let rendered = Pipeline::default()
        .run(&files, ExportMode::Jsonl)
        .render()
        .unwrap();
    let lines: Vec<Value> = rendered
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["filename"], "deck.pptx");
    assert_eq!(
        lines[0]["content"],
        "--- Slide 1 ---\nFirst\n\n--- Slide 2 ---\nSecond\n\n"
    );
    assert_eq!(lines[1]["filename"], "sheet.xlsx");
    assert!(lines[1]["content"]
        .as_str()
        .unwrap()
        .starts_with("[Error extracting text: "));
}

#[tokio::test]
async fn test_directory_to_output_file() {
    let input = tempdir().unwrap();
    std::fs::create_dir_all(input.path().join("tables")).unwrap();
    std::fs::write(input.path().join("tables/prices.csv"), "item,price\ntea,3\n").unwrap();
    std::fs::write(input.path().join("readme.txt"), "read me").unwrap();
    std::fs::write(input.path().join("ignored.bin"), [0u8, 1, 2]).unwrap();

    let files = collect_inputs(&[input.path().to_path_buf()], &ScanConfig::default())
        .await
        .unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["readme.txt", "tables/prices.csv"]);

    let batch = Pipeline::default().run(&files, ExportMode::Text);
    assert_eq!(batch.failed_count(), 0);

    let out = tempdir().unwrap();
    let path = out.path().join("corpus/all_content.txt");
    output::write_output(&path, &batch.render().unwrap())
        .await
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("==== BEGIN FILE: tables/prices.csv ===="));
    assert!(written.contains("item | price\ntea | 3\n"));
}
