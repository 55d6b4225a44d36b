use bookmark_outline_engine::{
    BookmarkTree, OutlineEntry, ParseOptions, StrategySelector, flatten, parse,
    parse_external_outline, parse_outline, serialize,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

const INDENTED: &str = "Preface 1
Part One 3
  Chapter 1 Origins 5
    1.1 Early days 6
    1.2 Growth 12
  Chapter 2 Decline 20
Part Two 31
  Chapter 3 Revival 33
Index 90
";

const NUMBERED: &str = "1 Introduction 1
1.1 Motivation 2
1.2 Outline 4
2 Background 7
2.1 Prior work 8
2.1.1 Early systems 8
3 Conclusion 30
Appendix
";

const CHINESE: &str = "第一章 总论 1
1.1 研究背景 2
1.2 研究意义 5
第二章 方法 10
2.1 数据 11
2.1.1 来源 11
第三章 结论 30
";

fn triples(tree: &BookmarkTree) -> Vec<(String, Option<i32>, usize)> {
    flatten(tree)
        .into_iter()
        .map(|e| (e.title, e.page, e.depth))
        .collect()
}

#[test]
fn end_to_end_indent_with_offset() {
    let text = "Chapter 1  1\n\tSection 1.1  2\nChapter 2  10\n";

    let tree = parse(text, 5, StrategySelector::Indent).unwrap();

    let root = tree.root();
    assert_eq!(tree[root].children().len(), 2);
    let chapter_1 = tree[root].children()[0];
    let section = tree[chapter_1].children()[0];
    let chapter_2 = tree[root].children()[1];

    assert_eq!(tree[chapter_1].title(), "Chapter 1");
    assert_eq!(tree[chapter_1].page(), Some(6));
    assert_eq!(tree[chapter_1].level(), 1);
    assert_eq!(tree[section].title(), "Section 1.1");
    assert_eq!(tree[section].page(), Some(7));
    assert_eq!(tree[section].level(), 2);
    assert_eq!(tree[chapter_2].title(), "Chapter 2");
    assert_eq!(tree[chapter_2].page(), Some(15));
    assert_eq!(tree[chapter_2].level(), 1);
    assert!(tree[chapter_2].children().is_empty());
}

#[test]
fn standard_sequence_line() {
    let tree = parse("1.2.5  Title  67", 0, StrategySelector::Auto).unwrap();

    assert_eq!(
        flatten(&tree),
        vec![OutlineEntry::new("1.2.5  Title", Some(67), 1)]
    );
    // The entry keeps level 3; only its placement in the empty tree is clamped
    let parsed = parse_outline("1.2.5  Title  67", &ParseOptions::default()).unwrap();
    assert_eq!(parsed.entries[0].title, "1.2.5  Title");
    assert_eq!(parsed.entries[0].page, Some(67));
    assert_eq!(parsed.entries[0].level, 3);
}

#[test]
fn plain_title_without_marker_or_page() {
    let tree = parse("Title", 0, StrategySelector::Auto).unwrap();
    assert_eq!(flatten(&tree), vec![OutlineEntry::new("Title", None, 1)]);
}

#[rstest]
#[case(INDENTED, StrategySelector::Indent)]
#[case(NUMBERED, StrategySelector::Auto)]
#[case(CHINESE, StrategySelector::Auto)]
fn offset_is_additive(#[case] text: &str, #[case] selector: StrategySelector) {
    let base = triples(&parse(text, 0, selector).unwrap());

    for k in [-4, 1, 17] {
        let shifted = triples(&parse(text, k, selector).unwrap());
        let expected: Vec<_> = base
            .iter()
            .map(|(title, page, depth)| (title.clone(), page.map(|p| p + k), *depth))
            .collect();
        assert_eq!(shifted, expected, "offset {k}");
    }
}

#[rstest]
#[case(INDENTED, StrategySelector::Indent)]
#[case(NUMBERED, StrategySelector::Auto)]
#[case(CHINESE, StrategySelector::Auto)]
fn serialize_then_parse_round_trips(#[case] text: &str, #[case] selector: StrategySelector) {
    let tree = parse(text, 0, selector).unwrap();

    let reparsed = parse(&serialize(&tree), 0, StrategySelector::Indent).unwrap();

    let canonical = |entries: Vec<(String, Option<i32>, usize)>| -> Vec<_> {
        entries
            .into_iter()
            .map(|(title, page, depth)| {
                let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
                (title, page, depth)
            })
            .collect()
    };
    assert_eq!(canonical(triples(&reparsed)), canonical(triples(&tree)));
}

#[test]
fn numbered_outline_shape() {
    let tree = parse(NUMBERED, 0, StrategySelector::Auto).unwrap();

    let depths: Vec<_> = flatten(&tree).iter().map(|e| e.depth).collect();
    assert_eq!(depths, vec![1, 2, 2, 1, 2, 3, 1, 1]);
    assert_snapshot!(format!("{:?}", serialize(&tree)), @r#""1  Introduction  1\n\t1.1  Motivation  2\n\t1.2  Outline  4\n2  Background  7\n\t2.1  Prior work  8\n\t\t2.1.1  Early systems  8\n3  Conclusion  30\nAppendix  \n""#);
}

#[test]
fn chinese_outline_shape() {
    let tree = parse(CHINESE, 0, StrategySelector::Auto).unwrap();

    assert_eq!(
        triples(&tree),
        vec![
            ("第一章  总论".to_string(), Some(1), 1),
            ("1.1  研究背景".to_string(), Some(2), 2),
            ("1.2  研究意义".to_string(), Some(5), 2),
            ("第二章  方法".to_string(), Some(10), 1),
            ("2.1  数据".to_string(), Some(11), 2),
            ("2.1.1  来源".to_string(), Some(11), 3),
            ("第三章  结论".to_string(), Some(30), 1),
        ]
    );
}

#[test]
fn external_outline_flattens_back_to_itself() {
    let outline = vec![
        OutlineEntry::new("Cover", None, 1),
        OutlineEntry::new("Contents", Some(2), 1),
        OutlineEntry::new("Part I", Some(5), 1),
        OutlineEntry::new("Chapter 1", Some(7), 2),
        OutlineEntry::new("Section 1.1", Some(8), 3),
        OutlineEntry::new("Part II", Some(50), 1),
    ];

    let tree = parse_external_outline(outline.clone()).unwrap();

    assert_eq!(flatten(&tree), outline);
}

#[test]
fn drag_and_drop_keeps_tree_consistent() {
    // Given a parsed outline
    let mut tree = parse(INDENTED, 0, StrategySelector::Indent).unwrap();
    let nodes: Vec<_> = tree.pre_order().collect();
    let (part_one, chapter_2, part_two) = (nodes[1], nodes[5], nodes[6]);

    // When chapter 2 is dropped as the first child of part two
    tree.change_pos_at(chapter_2, part_two, 0).unwrap();

    // Then the cached level is still right (same depth), and the structure moved
    assert_eq!(tree[part_one].children().len(), 1);
    assert_eq!(tree[part_two].children()[0], chapter_2);
    assert_eq!(tree.verify_levels(), Ok(()));

    // When a chapter is promoted to the top level
    tree.change_pos(chapter_2, tree.root()).unwrap();

    // Then the stale level is surfaced until refreshed
    assert!(tree.verify_levels().is_err());
    tree.refresh_levels();
    assert_eq!(tree.verify_levels(), Ok(()));
    assert_snapshot!(format!("{:?}", serialize(&tree)), @r#""Preface  1\nPart One  3\n\tChapter 1 Origins  5\n\t\t1.1 Early days  6\n\t\t1.2 Growth  12\nPart Two  31\n\tChapter 3 Revival  33\nIndex  90\nChapter 2 Decline  20\n""#);
}
