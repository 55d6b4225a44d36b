// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_indented_outline(parts: usize, depth: usize) -> String {
    let mut content = String::new();
    let mut page = 1;

    for part in 0..parts {
        content.push_str(&format!("Part {part} ........ {page}\n"));
        page += 1;
        for level in 1..depth {
            let indent = "  ".repeat(level);
            for item in 0..3 {
                content.push_str(&format!("{indent}Section {part}-{level}-{item}  {page}\n"));
                page += 2;
            }
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_numbered_outline(chapters: usize) -> String {
    let mut content = String::new();
    let mut page = 1;

    for chapter in 1..=chapters {
        content.push_str(&format!("{chapter}. Chapter title {page}\n"));
        for section in 1..=4 {
            page += 3;
            content.push_str(&format!("{chapter}.{section} Section title {page}\n"));
            content.push_str(&format!("{chapter}.{section}.1 Detail {}\n", page + 1));
        }
        page += 5;
    }

    content
}

#[allow(dead_code)]
pub fn generate_chinese_outline(chapters: usize) -> String {
    const NUMERALS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
    let mut content = String::new();
    let mut page = 1;

    for chapter in 0..chapters {
        let numeral = NUMERALS[chapter % NUMERALS.len()];
        content.push_str(&format!("第{numeral}章 概述 {page}\n"));
        for section in 1..=4 {
            page += 2;
            content.push_str(&format!("{}.{section} 小节 {page}\n", chapter + 1));
        }
        page += 4;
    }

    content
}
