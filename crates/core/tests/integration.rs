use sheetpack_core::{
    merge, split, today, Book, CellValue, DateFormat, MergeDatePrefix, NamingRule, SheetError,
    Sheet,
};

fn approx(cell: Option<&CellValue>, expected: f64) -> bool {
    matches!(cell, Some(CellValue::Float(f)) if (f - expected).abs() < f64::EPSILON)
}

// ===== Round-trip =====

#[test]
fn test_values_roundtrip() {
    let mut book = Book::new();
    book.add_sheet(
        "Mixed",
        Sheet::from_data(vec![
            vec![
                CellValue::String("header".to_string()),
                CellValue::Float(1.5),
            ],
            vec![CellValue::Bool(false), CellValue::String("매출".to_string())],
        ]),
    )
    .unwrap();
    book.add_sheet("Second", Sheet::from_data(vec![vec![9.0]]))
        .unwrap();

    let loaded = Book::from_xlsx_bytes(&book.to_xlsx_bytes().unwrap()).unwrap();

    assert_eq!(loaded.sheet_names(), vec!["Mixed", "Second"]);
    let mixed = loaded.get_sheet("Mixed").unwrap();
    assert_eq!(
        mixed.get(0, 0),
        Some(&CellValue::String("header".to_string()))
    );
    assert!(approx(mixed.get(0, 1), 1.5));
    assert_eq!(mixed.get(1, 0), Some(&CellValue::Bool(false)));
    assert_eq!(mixed.get(1, 1), Some(&CellValue::String("매출".to_string())));
}

// ===== Split then merge =====

#[test]
fn test_split_then_merge_restores_sheets() {
    let mut book = Book::new();
    book.add_sheet("One", Sheet::from_data(vec![vec![1.0]]))
        .unwrap();
    book.add_sheet("Two", Sheet::from_data(vec![vec![2.0]]))
        .unwrap();
    book.add_sheet("Three", Sheet::from_data(vec![vec![3.0]]))
        .unwrap();
    let bytes = book.to_xlsx_bytes().unwrap();

    let artifacts = split(&bytes, "source.xlsx", NamingRule::SheetOnly).unwrap();
    assert_eq!(artifacts.len(), 3);

    // Filenames are unique within the result set
    let mut filenames: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
    assert!(filenames.iter().all(|f| f.ends_with(".xlsx")));
    filenames.sort_unstable();
    filenames.dedup();
    assert_eq!(filenames.len(), 3);

    let files: Vec<(String, Vec<u8>)> = artifacts
        .into_iter()
        .map(|a| (a.filename, a.bytes))
        .collect();
    let merged = merge(&files, "rebuilt", MergeDatePrefix::None).unwrap();
    let rebuilt = Book::from_xlsx_bytes(&merged.bytes).unwrap();

    assert_eq!(rebuilt.sheet_names(), vec!["One", "Two", "Three"]);
    assert!(approx(rebuilt.get_sheet("Two").unwrap().get(0, 0), 2.0));
}

// ===== Merge properties =====

#[test]
fn test_merge_total_sheet_count() {
    let mut files = Vec::new();
    let mut expected_total = 0;
    for (idx, count) in [2usize, 3, 1].iter().enumerate() {
        let mut book = Book::new();
        for n in 0..*count {
            book.add_sheet(&format!("Tab{n}"), Sheet::from_data(vec![vec![n as f64]]))
                .unwrap();
        }
        expected_total += count;
        files.push((format!("file{idx}.xlsx"), book.to_xlsx_bytes().unwrap()));
    }

    let artifact = merge(&files, "all", MergeDatePrefix::None).unwrap();
    let book = Book::from_xlsx_bytes(&artifact.bytes).unwrap();

    assert_eq!(book.sheet_count(), expected_total);
    let names = book.sheet_names();
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

#[test]
fn test_merge_date_prefixed_filename() {
    let mut book = Book::new();
    book.add_sheet("Data", Sheet::from_data(vec![vec![1.0]]))
        .unwrap();
    let files = vec![("in.xlsx".to_string(), book.to_xlsx_bytes().unwrap())];

    let artifact = merge(&files, "report", MergeDatePrefix::Compact).unwrap();
    assert_eq!(
        artifact.filename,
        format!("{}_report.xlsx", today(DateFormat::Compact))
    );
}

// ===== Error propagation =====

#[test]
fn test_corrupt_input_aborts_whole_merge() {
    let mut book = Book::new();
    book.add_sheet("Data", Sheet::from_data(vec![vec![1.0]]))
        .unwrap();
    let good = book.to_xlsx_bytes().unwrap();

    let files = vec![
        ("ok.xlsx".to_string(), good),
        ("bad.xlsx".to_string(), vec![0, 1, 2, 3]),
    ];

    assert!(matches!(
        merge(&files, "out", MergeDatePrefix::None),
        Err(SheetError::Parse(_))
    ));
}

#[test]
fn test_corrupt_input_fails_split() {
    assert!(matches!(
        split(&[0u8; 16], "in.xlsx", NamingRule::SheetOnly),
        Err(SheetError::Parse(_))
    ));
}
