use tracen_core::DisplayRecord;

const STATISTICS: [(&str, &str); 4] = [
    ("25+", "Years of Excellence"),
    ("350+", "Expert Faculty"),
    ("5000+", "Students Enrolled"),
    ("99.8%", "University Placement"),
];

/// Headline figures; `subtitle` holds the value, `title` the label.
pub fn statistics() -> Vec<DisplayRecord> {
    STATISTICS
        .iter()
        .enumerate()
        .map(|(i, (value, label))| DisplayRecord::new(format!("stat-{}", i + 1), *label).with_subtitle(*value))
        .collect()
}
