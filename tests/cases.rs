use std::fs;

use equara::get_answer;
use walkdir::WalkDir;

/// Case files hold one `input => expected` pair per line; blank lines and
/// `#` comments are skipped.
#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "eq"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((input, expected)) = line.split_once("=>") else {
                panic!("Malformed case on line {} of {path:?}: {line}", i + 1);
            };
            count += 1;

            let answer = get_answer(input.trim()).unwrap_or_else(|e| {
                                                     panic!("Case '{}' in {path:?} failed: {e}",
                                                            input.trim())
                                                 });
            assert_eq!(answer.to_string(),
                       expected.trim(),
                       "case '{}' in {path:?}",
                       input.trim());
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}
